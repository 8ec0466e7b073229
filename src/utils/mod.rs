pub mod mass;
