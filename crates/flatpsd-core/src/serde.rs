#![cfg(feature = "serde")]

use alloc::format;

use serde::ser::*;

use crate::colorspace::ColorSpace;

impl Serialize for ColorSpace {
    #[allow(clippy::uninlined_format_args)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's debug value
        serializer.serialize_str(&format!("{:?}", self))
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::ColorSpace;

    #[test]
    fn colorspace_serializes_as_name() {
        let value = serde_json::to_string(&ColorSpace::RGBA).unwrap();
        assert_eq!(value, "\"RGBA\"");
    }
}
