pub mod encode_uri;
