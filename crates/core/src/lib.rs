pub mod config;
pub mod hint;
pub mod organizer;
pub mod placer;
pub mod report;
pub mod scaffold;
pub mod testing;

pub use config::{load_config, load_config_from, validate_config, Config, ConfigError};
pub use hint::{
    extract_path, find_hint, is_valid_path, scan_file, CommentSyntax, HintError, PathHint,
};
pub use organizer::{
    Organizer, OrganizerError, Placement, PlacementResult, Problem, ProblemKind, RunReport,
};
pub use placer::{FsPlacer, PlacedFile, Placer, PlacerConfig, PlacerError};
pub use report::{render, ReportView};
pub use scaffold::{ScaffoldSummary, Scaffolder, DEFAULT_SCAFFOLD};
