pub mod analyze_images;
pub mod check_symptoms;
