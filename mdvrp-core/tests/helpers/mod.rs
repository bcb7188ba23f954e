
pub use self::snapshot::*;
