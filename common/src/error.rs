use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ShapeError {
    #[error(
        "view must be finite with left < right and top < bottom (left_x: {left_x}, right_x: {right_x}, top_y: {top_y}, bottom_y: {bottom_y})"
    )]
    DegenerateView {
        left_x: f64,
        right_x: f64,
        top_y: f64,
        bottom_y: f64,
    },
    #[error("circle radius must be finite and non-negative (radius: {radius})")]
    InvalidCircleRadius { radius: f64 },
    #[error("circle center must be finite (x: {x}, y: {y})")]
    NonFiniteCenter { x: f64, y: f64 },
}

pub type ShapeResult<T> = Result<T, ShapeError>;
