//! Built-in schema for the Ames house-sale dataset.
//!
//! The distinguished column names, the imputation allow-list, and the
//! categorical-column set are domain constants of the house-sale records
//! this pipeline was built around. They are expressed as configuration
//! data so the encoder itself stays schema-agnostic; callers with a
//! different dataset supply their own [`EncodeOptions`] and hints.

use crate::encode::EncodeOptions;

/// Column holding the sale price, routed to the target vector.
pub const TARGET: &str = "SalePrice";

/// Row-identifier column, always dropped.
pub const ROW_ID: &str = "Id";

/// Categorical columns known to tolerate mode-imputation of missing cells.
pub const IMPUTABLE: &[&str] = &[
    "MSZoning",
    "BsmtFullBath",
    "BsmtHalfBath",
    "Utilities",
    "Functional",
    "Electrical",
    "KitchenQual",
    "SaleType",
    "Exterior1st",
    "Exterior2nd",
];

/// Columns of the house-sale schema treated as categorical.
///
/// Includes the numeric-coded categories (`MSSubClass`, basement bath
/// counts) alongside the textual ones.
pub const CATEGORICAL: &[&str] = &[
    "MSSubClass",
    "MSZoning",
    "Street",
    "Alley",
    "LotShape",
    "LandContour",
    "Utilities",
    "LotConfig",
    "LandSlope",
    "Neighborhood",
    "Condition1",
    "Condition2",
    "BldgType",
    "HouseStyle",
    "RoofStyle",
    "RoofMatl",
    "Exterior1st",
    "Exterior2nd",
    "MasVnrType",
    "ExterQual",
    "ExterCond",
    "Foundation",
    "BsmtQual",
    "BsmtCond",
    "BsmtExposure",
    "BsmtFinType1",
    "BsmtFinType2",
    "Heating",
    "HeatingQC",
    "CentralAir",
    "Electrical",
    "BsmtFullBath",
    "BsmtHalfBath",
    "KitchenQual",
    "Functional",
    "FireplaceQu",
    "GarageType",
    "GarageFinish",
    "GarageQual",
    "GarageCond",
    "PavedDrive",
    "PoolQC",
    "Fence",
    "MiscFeature",
    "SaleType",
    "SaleCondition",
];

/// Encoding options for the house-sale schema.
pub fn options() -> EncodeOptions {
    EncodeOptions::new()
        .with_target_column(TARGET)
        .with_drop_column(ROW_ID)
        .with_imputable_columns(IMPUTABLE.iter().copied())
}

/// Position-aligned type hints for an actual header.
///
/// Columns whose name appears in [`CATEGORICAL`] are marked categorical;
/// everything else (including unknown columns) is treated as numeric.
pub fn hints_for(header: &[String]) -> Vec<bool> {
    header
        .iter()
        .map(|name| CATEGORICAL.contains(&name.as_str()))
        .collect()
}
