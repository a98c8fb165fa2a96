pub(crate) mod promo;
