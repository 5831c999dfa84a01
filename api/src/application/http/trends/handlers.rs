pub mod get_trends;
