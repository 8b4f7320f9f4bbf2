mod ellipses;
mod properties;
