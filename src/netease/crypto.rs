//! weapi 请求加密（模拟网易云 Web 端）
//!
//! params:    JSON → AES-CBC(preset_key) → base64 → AES-CBC(session_key) → base64
//! encSecKey: reverse(session_key) → modpow(e, n) → hex（左侧补零至 131 位）

use aes::Aes128;
use base64::Engine;
use block_padding::Pkcs7;
use cbc::cipher::KeyIvInit;
use cipher::block_padding::UnpadError;
use cipher::{BlockDecryptMut, BlockEncryptMut};
use once_cell::sync::Lazy;
use rand::RngCore;
use rsa::BigUint;
use serde::Serialize;

/// weapi 方案中全部固定常量，上游校验时必须逐字节一致
#[derive(Debug, Clone, Copy)]
pub struct WeapiKeys {
    pub iv: &'static [u8; 16],
    pub preset_key: &'static [u8; 16],
    pub pub_exponent_hex: &'static str,
    pub modulus_hex: &'static str,
}

impl WeapiKeys {
    pub const NETEASE: WeapiKeys = WeapiKeys {
        iv: b"0102030405060708",
        preset_key: b"0CoJUm6Qyw8W8jud",
        pub_exponent_hex: "010001",
        modulus_hex: "00e0b509f6259df8642dbc35662901477df22677ec152b5ff68ace615bb7b725152b3ab17a876aea8a5aa76d2e417629ec4ee341f56135fccf695280104e0312ecbda92557c93870114af6c9d05c4f7f0c3685b7a46bee255932575cce10b424d813cfe4875d3e82047b97ddef52741d546b8e289dc6935b3ece0462db0a22b8e7",
    };
}

pub const SESSION_KEY_LEN: usize = 16;
const ENC_SEC_KEY_MIN_LEN: usize = 131;
const BASE62: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

struct RsaParams {
    e: BigUint,
    n: BigUint,
}

static RSA_PARAMS: Lazy<Result<RsaParams, hex::FromHexError>> = Lazy::new(|| {
    let keys = WeapiKeys::NETEASE;
    Ok(RsaParams {
        e: biguint_from_hex(keys.pub_exponent_hex)?,
        n: biguint_from_hex(keys.modulus_hex)?,
    })
});

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// 一次上游调用的加密表单，作为 `params` / `encSecKey` 两个字段提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeapiForm {
    pub params: String,
    pub enc_sec_key: String,
}

impl WeapiForm {
    pub fn into_form(self) -> Vec<(&'static str, String)> {
        vec![("params", self.params), ("encSecKey", self.enc_sec_key)]
    }
}

fn biguint_from_hex(s: &str) -> Result<BigUint, hex::FromHexError> {
    Ok(BigUint::from_bytes_be(&hex::decode(s)?))
}

fn aes_128_cbc_encrypt_base64(pt: &[u8], key: &[u8; 16], iv: &[u8; 16]) -> Result<String, CryptoError> {
    let mut buf = pt.to_vec();
    let msg_len = buf.len();
    buf.resize(msg_len + 16, 0);
    let ct = Aes128CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_mut::<Pkcs7>(&mut buf, msg_len)
        .map_err(|_| CryptoError::EncryptPad)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(ct))
}

fn aes_128_cbc_decrypt_base64(ct_b64: &str, key: &[u8; 16], iv: &[u8; 16]) -> Result<Vec<u8>, CryptoError> {
    let mut buf = base64::engine::general_purpose::STANDARD
        .decode(ct_b64)
        .map_err(CryptoError::BadBase64)?;
    let pt = Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map_err(CryptoError::BadPadding)?;
    Ok(pt.to_vec())
}

fn rsa_encrypt_none_hex(pt: &[u8]) -> Result<String, CryptoError> {
    let params = RSA_PARAMS
        .as_ref()
        .map_err(|e| CryptoError::BadHex(e.clone()))?;
    let m = BigUint::from_bytes_be(pt);
    let c = m.modpow(&params.e, &params.n);
    let out = c.to_str_radix(16);
    Ok(format!("{out:0>width$}", width = ENC_SEC_KEY_MIN_LEN))
}

pub fn random_session_key() -> [u8; SESSION_KEY_LEN] {
    let mut rng = rand::thread_rng();
    let mut raw = [0u8; SESSION_KEY_LEN];
    rng.fill_bytes(&mut raw);
    raw.map(|b| BASE62[(b as usize) % BASE62.len()])
}

/// 紧凑 JSON，保留调用方的字段顺序
pub fn canonical_json<T: Serialize + ?Sized>(data: &T) -> Result<String, CryptoError> {
    serde_json::to_string(data).map_err(CryptoError::BadJson)
}

pub fn weapi<T: Serialize + ?Sized>(data: &T) -> Result<WeapiForm, CryptoError> {
    weapi_with_key(data, &random_session_key())
}

/// 指定 session key 的 weapi 加密；相同输入与 key 产生完全相同的输出
pub fn weapi_with_key<T: Serialize + ?Sized>(
    data: &T,
    session_key: &[u8; SESSION_KEY_LEN],
) -> Result<WeapiForm, CryptoError> {
    let keys = WeapiKeys::NETEASE;
    let text = canonical_json(data)?;

    let p1 = aes_128_cbc_encrypt_base64(text.as_bytes(), keys.preset_key, keys.iv)?;
    let params = aes_128_cbc_encrypt_base64(p1.as_bytes(), session_key, keys.iv)?;

    let mut reversed_sk = *session_key;
    reversed_sk.reverse();
    let enc_sec_key = rsa_encrypt_none_hex(&reversed_sk)?;

    Ok(WeapiForm {
        params,
        enc_sec_key,
    })
}

/// 已知 session key 时还原 `params` 中的明文 JSON
pub fn decrypt_params(params: &str, session_key: &[u8; SESSION_KEY_LEN]) -> Result<String, CryptoError> {
    let keys = WeapiKeys::NETEASE;
    let p1 = aes_128_cbc_decrypt_base64(params, session_key, keys.iv)?;
    let p1 = String::from_utf8(p1).map_err(CryptoError::BadUtf8)?;
    let text = aes_128_cbc_decrypt_base64(&p1, keys.preset_key, keys.iv)?;
    String::from_utf8(text).map_err(CryptoError::BadUtf8)
}

#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    #[error("AES 加密 padding 错误")]
    EncryptPad,
    #[error("hex 解码失败: {0}")]
    BadHex(hex::FromHexError),
    #[error("base64 解码失败: {0}")]
    BadBase64(base64::DecodeError),
    #[error("AES 解密 padding 错误: {0}")]
    BadPadding(UnpadError),
    #[error("UTF-8 解码失败: {0}")]
    BadUtf8(std::string::FromUtf8Error),
    #[error("JSON 序列化失败: {0}")]
    BadJson(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const KEY: &[u8; 16] = b"abcdefghijklmnop";

    #[test]
    fn weapi_matches_known_vector() {
        let form = weapi_with_key(
            &json!({ "s": "hello", "type": 1, "limit": 30, "offset": 0 }),
            KEY,
        )
        .unwrap();
        assert_eq!(
            form.params,
            "5MjOCzZ9H0SCn6HoP41wqnpsZYxFF+mudZnRydotwzhhu3rWxU+RFlLbGNLB2axH3CW9ReRaTZU++PIBvQAySxMnuH/R/87mEda3KPqmkmk="
        );
        assert_eq!(
            form.enc_sec_key,
            "d15a1683c992095d0c234c19966605c5c5964911268bbeda8cb8d08d834913e59d53b32358903a121b5fca784c1f5ae44951fd02524df58ecc98e52cc7cf8689b42c2e93ddf05b0592512d87f5960467e2f086c018849d76014d323500e30f13ef4cafbb0cf5a66731a3f1776c75ca35d0062dac70a3e33245afabcf47938487"
        );
    }

    #[test]
    fn weapi_is_deterministic_for_fixed_key() {
        let data = json!({ "id": 186016, "lv": -1, "tv": -1 });
        let a = weapi_with_key(&data, KEY).unwrap();
        let b = weapi_with_key(&data, KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn canonical_json_keeps_key_order() {
        let text = canonical_json(&json!({ "s": "周杰伦", "type": 1, "limit": 30, "offset": 0 })).unwrap();
        assert_eq!(text, r#"{"s":"周杰伦","type":1,"limit":30,"offset":0}"#);
    }

    #[test]
    fn params_roundtrip_recovers_canonical_json() {
        let data = json!({ "s": "七里香 jay", "type": 1, "limit": 5, "offset": 0 });
        let key = random_session_key();
        let form = weapi_with_key(&data, &key).unwrap();
        assert_eq!(decrypt_params(&form.params, &key).unwrap(), canonical_json(&data).unwrap());
    }

    #[test]
    fn enc_sec_key_is_lowercase_hex_min_131() {
        for _ in 0..32 {
            let form = weapi_with_key(&json!({}), &random_session_key()).unwrap();
            assert!(form.enc_sec_key.len() >= 131);
            assert!(form
                .enc_sec_key
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    #[test]
    fn short_rsa_result_is_left_padded() {
        // 1^e mod n == 1
        let hex = rsa_encrypt_none_hex(&[1]).unwrap();
        assert_eq!(hex.len(), 131);
        assert!(hex.ends_with('1'));
        assert!(hex[..130].chars().all(|c| c == '0'));
    }

    #[test]
    fn session_key_is_base62() {
        let key = random_session_key();
        assert_eq!(key.len(), SESSION_KEY_LEN);
        assert!(key.iter().all(u8::is_ascii_alphanumeric));
    }

    #[test]
    fn decrypt_with_wrong_key_fails() {
        let form = weapi_with_key(&json!({ "id": 1 }), KEY).unwrap();
        assert!(decrypt_params(&form.params, b"ponmlkjihgfedcba").is_err());
    }
}
