pub mod lcs;
pub mod normalize;
pub mod report;
pub mod score;
pub mod similarity;
pub mod word_check;
