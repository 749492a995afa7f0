pub mod use_metal_quote;
