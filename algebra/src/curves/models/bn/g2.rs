use crate::curves::{models::bn::BnParameters, short_weierstrass_affine::GroupAffine};

pub type G2Affine<P> = GroupAffine<<P as BnParameters>::G2Parameters>;
