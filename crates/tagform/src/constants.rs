/// Reserved wire key carrying the variant name.
///
/// Every object produced by a derived codec carries this key; decoding reads
/// it as the discriminator regardless of where it sits in the object. A
/// structural field with the same name is overwritten by the tag on encode.
pub const VARIANT_TAG: &str = "$variant";
