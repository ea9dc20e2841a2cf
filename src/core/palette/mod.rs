pub mod sinusoid;
