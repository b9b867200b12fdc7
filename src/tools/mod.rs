pub mod brush;
pub mod bucket;
pub mod eyedropper;
pub mod geometry;
pub mod line;
pub mod magnifier;
pub mod pencil;
pub mod rect_select;
pub mod shape;
pub mod shapes;
pub mod stroke;
pub mod tool_trait;

#[cfg(test)]
pub(crate) mod test_support;
