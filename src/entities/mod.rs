mod record;
mod word;

pub use record::PlacementStatus;
pub use record::WordRecord;
pub use word::Word;
