mod porter2;

pub use porter2::porter2_stemmer;
