use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unsupported drug. Supported drugs: {supported}")]
    UnsupportedDrug { drug: String, supported: String },

    #[error("Unsupported {field}. Supported genes: {supported}")]
    UnsupportedGene {
        field: &'static str,
        gene: String,
        supported: String,
    },
}
