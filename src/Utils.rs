/// loading of rate coefficients from a text document with a "KINETICS" or "REACTIONS"
/// JSON section
pub mod load_from_file;
