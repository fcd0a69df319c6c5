pub mod raster;
pub mod svg;
