pub mod a001_country;
