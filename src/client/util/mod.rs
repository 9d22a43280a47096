pub mod activate;
