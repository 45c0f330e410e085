// Absolute document position of an element.
//
// Layout offsets are relative to the nearest positioned ancestor (the offset
// parent), so the document-space top is the sum along the offset-parent chain.

/// Read-only view of the layout geometry needed to place an element.
pub trait OffsetNode: Sized {
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn offset_parent(&self) -> Option<Self>;
}

/// Distance from the top of the document to the top edge of `node`.
///
/// A node without an offset parent (the body, or a detached element) contributes
/// only its own local offset.
pub fn document_top<N: OffsetNode>(node: &N) -> f64 {
    let mut top = node.offset_top();
    let mut cursor = node.offset_parent();
    while let Some(parent) = cursor {
        top += parent.offset_top();
        cursor = parent.offset_parent();
    }
    top
}

/// Document-space Y of the vertical center of `node`.
#[inline]
pub fn anchor_y<N: OffsetNode>(node: &N) -> f64 {
    document_top(node) + node.offset_height() / 2.0
}
