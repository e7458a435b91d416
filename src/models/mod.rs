pub mod peak;
pub mod progress;
pub mod view;
pub mod warning;

pub use peak::Peak;
pub use progress::{FieldChanges, ProgressRecord};
pub use view::{StatusFilter, ViewFilter, ViewRow};
pub use warning::{ValidationWarning, WarningSource};
