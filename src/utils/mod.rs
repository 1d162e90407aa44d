pub mod sequences;
