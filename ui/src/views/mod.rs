mod analyzing;
pub use analyzing::AnalyzingPanel;

mod studio;
pub use studio::{Studio, StudioEvent};

mod upload;
pub use upload::{UploadBox, UploadPanel};
