pub mod clear_scan_cache;
pub mod get_scan_cache;
pub mod scan_label_image;
pub mod scan_label_text;
