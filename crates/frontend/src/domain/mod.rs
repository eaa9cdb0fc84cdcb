pub mod a001_main_code;
pub mod a002_artifact;
