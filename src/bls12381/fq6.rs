use super::fq2::Fq2;
use crate::ff_ext::cubic::CubicExtField;

crate::impl_binops_additive!(Fq6, Fq6);
crate::impl_binops_multiplicative!(Fq6, Fq6);
crate::impl_binops_calls!(Fq6);
crate::impl_sum_prod!(Fq6);

/// Fq2[v] / (v³ - (u + 1))
pub type Fq6 = CubicExtField<Fq2>;
