//! JSON rendering of collision results.

use sat2d::sat::CollisionResult;
use sat2d::Vec2;
use serde::Serialize;

/// One collision query as printed or written by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<i64>,
    pub collides: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtv: Option<[f64; 2]>,
}

#[inline]
pub fn xy(v: Vec2<f64>) -> [f64; 2] {
    [v.x, v.y]
}

impl QueryReport {
    pub fn new(query: Option<i64>, res: &CollisionResult) -> Self {
        let contact = res.contact();
        Self {
            query,
            collides: res.collides(),
            axis: contact.map(|c| xy(c.axis)),
            overlap: contact.map(|c| c.overlap),
            mtv: contact.map(|c| xy(c.mtv)),
        }
    }
}
