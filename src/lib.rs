#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod size;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Algorithm, Config, GRID_WIDTH, GridConfig, SizeDefaults, load_config};
pub use ir::{Dashboard, DeclaredWidth, GridPoint, PanelDecl, PanelSpec};
pub use layout::{Layout, LayoutError, Placement, Rect, compute_layout, pin_panel};
pub use size::{SEMANTIC_WIDTHS, resolve};
