// Bag-of-words model — vocabulary, presence vectors, distinguishing tokens.

pub mod distinguish;
pub mod vector;
pub mod vocabulary;
