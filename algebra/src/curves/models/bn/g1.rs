use crate::curves::{models::bn::BnParameters, short_weierstrass_affine::GroupAffine};

pub type G1Affine<P> = GroupAffine<<P as BnParameters>::G1Parameters>;
