use crate::{
    crh::Sm3,
    error::Error,
    rand::{FixedRandom, OsRandom},
    sm2::Sm2,
    KeyExchangeMode,
};
use gm_algebra::curves::PcMode;

const SK: &str = "3945208F7B2144B13F36E38AC6D39F95889393692860B51A42FB81EF4DF7C5B8";
const PK: &str = "0409F9DF311E5421A150DD7D161E4BC5C672179FAD1833FC076BB08FF356F35020\
                  CCEA490CE26775A52DC6EA718CC1AA600AED05FBF35E084A6632F6072DA9AD13";
const UID: &[u8] = b"1234567812345678";
const K: &str = "59276E27D506861A16680F3AD9C02DCCEF3CC1FA3CDBE4CE6D54B80DEAC1BC21";

fn fixed_instance(k: &str) -> Sm2<Sm3, FixedRandom> {
    let mut sm2 = Sm2::<Sm3, FixedRandom>::with_rng(FixedRandom::from_be_bytes(
        &hex::decode(k).unwrap(),
    ));
    sm2.set_secret_key(&hex::decode(SK).unwrap()).unwrap();
    sm2.set_public_key(&hex::decode(PK).unwrap()).unwrap();
    sm2.set_uid(UID);
    sm2
}

#[test]
fn sign_vector() {
    let mut sm2 = fixed_instance(K);
    let (r, s) = sm2.sign(b"message digest").unwrap();
    assert_eq!(
        r,
        hex::decode("F5A03B0648D2C4630EEAC513E1BB81A15944DA3827D5B74143AC7EACEEE720B3")
            .unwrap()
    );
    assert_eq!(
        s,
        hex::decode("B1B6AA29DF212FD8763182BC0D421CA1BB9038FD1F7F42D4840B69C485BBC1AA")
            .unwrap()
    );
    assert_eq!(sm2.verify(b"message digest", &r, &s), Ok(true));
    assert_eq!(sm2.verify(b"message digest!", &r, &s), Ok(false));
}

#[test]
fn verify_rejects_out_of_range_scalars() {
    let sm2 = fixed_instance(K);
    let (r, s) = {
        let mut signer = fixed_instance(K);
        signer.sign(b"message digest").unwrap()
    };
    let zero = [0u8; 32];
    let order =
        hex::decode("FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123")
            .unwrap();

    assert_eq!(sm2.verify(b"message digest", &zero, &s), Ok(false));
    assert_eq!(sm2.verify(b"message digest", &r, &zero), Ok(false));
    assert_eq!(sm2.verify(b"message digest", &order, &s), Ok(false));
    assert_eq!(sm2.verify(b"message digest", &r, &order), Ok(false));
    // r + s = n makes t vanish
    let mut one = [0u8; 32];
    one[31] = 1;
    let mut n_minus_one = order.clone();
    n_minus_one[31] -= 1;
    assert_eq!(sm2.verify(b"message digest", &one, &n_minus_one), Ok(false));
    // short encodings never verify
    assert_eq!(sm2.verify(b"message digest", &r[1..], &s[..31]), Ok(false));
}

#[test]
fn signing_with_compressed_public_key() {
    let mut sm2 = Sm2::<Sm3, FixedRandom>::with_rng(FixedRandom::from_be_bytes(
        &hex::decode(K).unwrap(),
    ));
    sm2.set_secret_key(&hex::decode(SK).unwrap()).unwrap();
    // y ends in 0x13: odd, prefix 0x03
    sm2.set_public_key(
        &hex::decode("0309F9DF311E5421A150DD7D161E4BC5C672179FAD1833FC076BB08FF356F35020")
            .unwrap(),
    )
    .unwrap();
    sm2.set_uid(UID);
    let (r, s) = sm2.sign(b"message digest").unwrap();
    assert_eq!(sm2.verify(b"message digest", &r, &s), Ok(true));
}

#[test]
fn encrypt_vector() {
    let mut sm2 = fixed_instance(K);
    let cipher = sm2.encrypt(b"encryption standard").unwrap();
    let expected = hex::decode(
        "0404EBFC718E8D1798620432268E77FEB6415E2EDE0E073C0F4F640ECD2E149A73\
         E858F9D81E5430A57B36DAAB8F950A3C64E6EE6A63094D99283AFF767E124DF0\
         59983C18F809E262923C53AEC295D30383B54E39D609D160AFCB1908D0BD8766\
         21886CA989CA9C7D58087307CA93092D651EFA",
    )
    .unwrap();
    assert_eq!(cipher, expected);
    assert_eq!(sm2.decrypt(&cipher).unwrap(), b"encryption standard");
}

#[test]
fn decrypt_rejects_tampering() {
    let mut sm2 = fixed_instance(K);
    let cipher = sm2.encrypt(b"encryption standard").unwrap();

    // C3 mismatch
    let mut tampered = cipher.clone();
    tampered[65] ^= 1;
    assert_eq!(
        sm2.decrypt(&tampered),
        Err(Error::CheckFailed("hash value mismatch"))
    );

    // C1 off the curve
    let mut off_curve = cipher.clone();
    off_curve[64] ^= 1;
    assert_eq!(
        sm2.decrypt(&off_curve),
        Err(Error::Algebra(gm_algebra::Error::PointNotOnCurve))
    );

    // unknown PC byte
    let mut bad_prefix = cipher.clone();
    bad_prefix[0] = 0x05;
    assert_eq!(
        sm2.decrypt(&bad_prefix),
        Err(Error::Algebra(gm_algebra::Error::InvalidPcByte(0x05)))
    );

    // too short for C1 || C3
    assert!(matches!(
        sm2.decrypt(&cipher[..70]),
        Err(Error::IncorrectLength { .. })
    ));
}

#[test]
fn key_exchange_vector() {
    let d_a = hex::decode("81EB26E941BB5AF16DF116495F90695272AE2CD63D6C4AE1678418BE48230029")
        .unwrap();
    let d_b = hex::decode("785129917D45A9EA5437A59356B82338EAADDA6CEB199088F14AE10DEFA229B5")
        .unwrap();
    let r_a = "D4DE15474DB74D06491C440D305E012400990F3E390C7E87153C12DB2EA60BB3";
    let r_b = "7E07124814B309489125EAED101113164EBF0F3458C5BD88335C1F9D596243D6";

    let mut alice = Sm2::<Sm3, FixedRandom>::with_rng(FixedRandom::from_be_bytes(
        &hex::decode(r_a).unwrap(),
    ));
    alice.set_secret_key(&d_a).unwrap();
    alice.set_uid(UID);
    let mut bob = Sm2::<Sm3, FixedRandom>::with_rng(FixedRandom::from_be_bytes(
        &hex::decode(r_b).unwrap(),
    ));
    bob.set_secret_key(&d_b).unwrap();
    bob.set_uid(UID);

    let (ra_bytes, ctx_a) = alice.begin_key_exchange().unwrap();
    let (rb_bytes, ctx_b) = bob.begin_key_exchange().unwrap();

    let pk_a = alice.public_key_bytes().unwrap();
    let pk_b = bob.public_key_bytes().unwrap();

    let key_a = alice
        .end_key_exchange(16, &ctx_a, UID, &pk_b, &rb_bytes, KeyExchangeMode::Initiator)
        .unwrap();
    let key_b = bob
        .end_key_exchange(16, &ctx_b, UID, &pk_a, &ra_bytes, KeyExchangeMode::Responder)
        .unwrap();

    assert_eq!(key_a, key_b);
    assert_eq!(
        key_a,
        hex::decode("6C89347354DE2484C60B4AB1FDE4C6E5").unwrap()
    );
}

#[test]
fn fresh_keypair_roundtrip() {
    let mut sm2 = Sm2::new();
    let (sk, pk) = sm2.generate_keypair();
    assert!(sm2.verify_pubkey(&pk));

    let mut user = Sm2::<Sm3, OsRandom>::with_rng(OsRandom::new());
    user.set_secret_key(&sk).unwrap();
    user.set_uid(b"fresh-user");
    let (r, s) = user.sign(b"a fresh message").unwrap();
    assert_eq!(user.verify(b"a fresh message", &r, &s), Ok(true));

    let cipher = user.encrypt(b"round trip").unwrap();
    assert_eq!(user.decrypt(&cipher).unwrap(), b"round trip");
}

#[test]
fn pubkey_validation_rejects_garbage() {
    let sm2 = Sm2::new();
    assert!(!sm2.verify_pubkey(&[0x00]));
    assert!(!sm2.verify_pubkey(&[0x04; 65]));
    assert!(!sm2.verify_pubkey(b""));
}

#[test]
fn missing_key_material_is_reported() {
    let mut sm2 = Sm2::new();
    assert!(matches!(
        sm2.sign(b"m"),
        Err(Error::RequireArgument { operation: "sign", .. })
    ));
    assert!(matches!(
        sm2.decrypt(&[0u8; 100]),
        Err(Error::RequireArgument { .. })
    ));
    assert!(!sm2.can_sign());
    assert!(!sm2.can_exchange_key());
}

#[test]
fn oversized_uid_overflows() {
    let mut sm2 = fixed_instance(K);
    sm2.set_uid(&vec![0u8; 8192]);
    assert!(matches!(
        sm2.sign(b"m"),
        Err(Error::DataOverflow { .. })
    ));
}

#[test]
fn compressed_cipher_wire_format() {
    let mut sm2 = fixed_instance(K);
    sm2.set_pc_mode(PcMode::Compressed);
    let cipher = sm2.encrypt(b"encryption standard").unwrap();
    assert!(cipher[0] == 0x02 || cipher[0] == 0x03);
    assert_eq!(cipher.len(), 1 + 32 + 32 + 19);
    assert_eq!(sm2.decrypt(&cipher).unwrap(), b"encryption standard");
}
