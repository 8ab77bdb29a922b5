pub mod offer;
pub mod ratio_table;
pub mod sku_table;
pub mod workshop;
