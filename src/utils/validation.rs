use validator::ValidationError;

use crate::models::order::ProductImage;

pub fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("product_name_blank"));
    }
    Ok(())
}

pub fn validate_product_image(image: &ProductImage) -> Result<(), ValidationError> {
    match image {
        ProductImage::Asset(reference) if reference.trim().is_empty() => {
            Err(ValidationError::new("product_image_blank"))
        }
        _ => Ok(()),
    }
}
