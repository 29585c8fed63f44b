pub mod expire_discounts;
