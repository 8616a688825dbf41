/// A slider configuration that can't be rendered.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("the item collection is empty")]
    EmptyCollection,
    #[error("tiles_to_show must be a finite number >= 1, got {0}")]
    InvalidTilesToShow(f64),
    #[error("page_step must move at least one tile")]
    ZeroPageStep,
}
