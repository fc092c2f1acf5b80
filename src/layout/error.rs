use thiserror::Error;

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Reasons a dashboard cannot be laid out. None of them are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("invalid size: {0}")]
    InvalidSize(String),

    #[error("pinned panels `{first}` and `{second}` overlap")]
    OverlappingPinnedPanels { first: String, second: String },

    #[error("panel `{id}` is {width} columns wide, the grid has {grid}", grid = crate::config::GRID_WIDTH)]
    PanelWiderThanGrid { id: String, width: u32 },

    #[error("pinned panel `{id}` at x={x} with width {width} extends past the grid edge")]
    PinnedOutOfBounds { id: String, x: u32, width: u32 },

    #[error("panel `{id}` sets only one of `x` and `y`")]
    IncompletePosition { id: String },

    #[error("panel `{id}` has a negative or out-of-range position")]
    InvalidPosition { id: String },

    #[error("panel id `{id}` is used more than once")]
    DuplicatePanelId { id: String },

    #[error("no panel with id `{id}`")]
    UnknownPanel { id: String },

    #[error("internal layout error: {0}")]
    Internal(String),
}

impl LayoutError {
    pub(crate) fn for_panel(self, id: &str) -> Self {
        match self {
            Self::InvalidSize(reason) => Self::InvalidSize(format!("panel `{id}`: {reason}")),
            other => other,
        }
    }
}
