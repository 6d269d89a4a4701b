mod stemmers;

pub use stemmers::porter2_stemmer;
