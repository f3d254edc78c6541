mod config;
mod scan;
mod translate;
