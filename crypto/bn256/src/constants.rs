//! Fixed parameters of the BN256 curve.
//!
//! The curve is the Barreto-Naehrig curve generated by `u = 1868033³`. The
//! Frobenius coefficients are the powers of the sextic non-residue
//! `ξ = i + 3` listed below, fixed as literals rather than derived at
//! runtime.

use crate::fp2::Fp2;
use num_bigint::BigUint;
use std::sync::LazyLock;

fn big(s: &str) -> BigUint {
    // Only called on the decimal literals in this module.
    match BigUint::parse_bytes(s.as_bytes(), 10) {
        Some(v) => v,
        None => unreachable!("malformed decimal constant"),
    }
}

/// The BN parameter `u` determining the prime: `1868033³`.
pub(crate) static U: LazyLock<BigUint> = LazyLock::new(|| big("6518589491078791937"));

/// The base-field prime `p = 36u⁴ + 36u³ + 24u² + 6u + 1`.
pub(crate) static P: LazyLock<BigUint> = LazyLock::new(|| {
    big("65000549695646603732796438742359905742825358107623003571877145026864184071783")
});

/// The group order `r = 36u⁴ + 36u³ + 18u² + 6u + 1` of `G1`, `G2` and `GT`.
pub(crate) static ORDER: LazyLock<BigUint> = LazyLock::new(|| {
    big("65000549695646603732796438742359905742570406053903786389881062969044166799969")
});

/// `b` of the curve equation `y² = x³ + b` over the base field.
pub(crate) static CURVE_B: LazyLock<BigUint> = LazyLock::new(|| BigUint::from(3u32));

/// `b' = 3·ξ⁻¹` of the twist equation over `GF(p²)`.
pub(crate) static TWIST_B: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("6500054969564660373279643874235990574282535810762300357187714502686418407178"),
        big("45500384786952622612957507119651934019977750675336102500314001518804928850249"),
    )
});

/// Affine coordinates of the `G2` subgroup generator: the cofactor-cleared
/// canonical point above `x = (0, k)` with the smallest such `k`.
pub(crate) static G2_GEN_X: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("37922093532360049189763125660680085009095210847258798921531242051127928584678"),
        big("5837950161076602142406469749277267396806843592169167126675409024103291400447"),
    )
});
pub(crate) static G2_GEN_Y: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("2388162513742705486992848308759770692275378755348578378957911730244988162734"),
        big("26180547068252175148995964247167179751077928818820136075369987888647593499158"),
    )
});

// Frobenius coefficients: ξ raised to the fractional exponents used when
// pushing the p-power map through the tower.

/// `ξ^((p−1)/6)`
pub(crate) static XI_TO_P_MINUS_1_OVER_6: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("8669379979083712429711189836753509758585994370025260553045152614783263110636"),
        big("19998038925833620163537568958541907098007303196759855091367510456613536016040"),
    )
});

/// `ξ^((p−1)/3)`
pub(crate) static XI_TO_P_MINUS_1_OVER_3: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("26098034838977895781559542626833399156321265654106457577426020397262786167059"),
        big("15931493369629630809226283458085260090334794394361662678240713231519278691715"),
    )
});

/// `ξ^((p−1)/2)`
pub(crate) static XI_TO_P_MINUS_1_OVER_2: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("50997318142241922852281555961173165965672272825141804376761836765206060036244"),
        big("38665955945962842195025998234511023902832543644254935982879660597356748036009"),
    )
});

/// `ξ^((2p−2)/3)`
pub(crate) static XI_TO_2P_MINUS_2_OVER_3: LazyLock<Fp2> = LazyLock::new(|| {
    Fp2::new(
        big("19885131339612776214803633203834694332692106372356013117629940868870585019582"),
        big("21645619881471562101905880913352894726728173167203616652430647841922248593627"),
    )
});

/// `ξ^((p²−1)/3)`; lies in the base field.
pub(crate) static XI_TO_P_SQUARED_MINUS_1_OVER_3: LazyLock<BigUint> = LazyLock::new(|| {
    big("65000549695646603727810655408050771481677621702948236658134783353303381437752")
});

/// `ξ^((p²−1)/6)`; lies in the base field.
pub(crate) static XI_TO_P_SQUARED_MINUS_1_OVER_6: LazyLock<BigUint> = LazyLock::new(|| {
    big("65000549695646603727810655408050771481677621702948236658134783353303381437753")
});

/// `ξ^((2p²−2)/3)`; lies in the base field.
pub(crate) static XI_TO_2P_SQUARED_MINUS_2_OVER_3: LazyLock<BigUint> =
    LazyLock::new(|| big("4985783334309134261147736404674766913742361673560802634030"));

/// Non-adjacent form of `6u + 2 = 39111536946472751624`, least-significant
/// digit first. The Miller loop walks this pattern from the top.
pub(crate) const SIX_U_PLUS_2_NAF: [i8; 66] = [
    0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, -1, 0, 1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0,
    -1, 0, 1, 0, 0, 0, 1, 0, -1, 0, 0, 0, -1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, -1, 0, -1, 0, 0, 0, 0,
    1, 0, 0, 0, 1,
];
