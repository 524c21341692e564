//! Display labels for the language codes whisper can detect.

/// Label for codes missing from [`LANGUAGES`].
pub const UNKNOWN_LANGUAGE: &str = "Ngôn ngữ không xác định";

/// `(code, label)` pairs sorted by code.
pub static LANGUAGES: &[(&str, &str)] = &[
    ("af", "Tiếng Afrikaans"),
    ("am", "Tiếng Amharic"),
    ("ar", "Tiếng Ả Rập"),
    ("as", "Tiếng Assam"),
    ("az", "Tiếng Azerbaijan"),
    ("ba", "Tiếng Bashkir"),
    ("be", "Tiếng Belarus"),
    ("bg", "Tiếng Bulgaria"),
    ("bn", "Tiếng Bengal"),
    ("bo", "Tiếng Tây Tạng"),
    ("br", "Tiếng Breton"),
    ("bs", "Tiếng Bosnia"),
    ("ca", "Tiếng Catalan"),
    ("cs", "Tiếng Séc"),
    ("cy", "Tiếng Wales"),
    ("da", "Tiếng Đan Mạch"),
    ("de", "Tiếng Đức"),
    ("el", "Tiếng Hy Lạp"),
    ("en", "Tiếng Anh"),
    ("es", "Tiếng Tây Ban Nha"),
    ("et", "Tiếng Estonia"),
    ("eu", "Tiếng Basque"),
    ("fa", "Tiếng Ba Tư"),
    ("fi", "Tiếng Phần Lan"),
    ("fo", "Tiếng Faroe"),
    ("fr", "Tiếng Pháp"),
    ("gl", "Tiếng Galicia"),
    ("gu", "Tiếng Gujarat"),
    ("ha", "Tiếng Hausa"),
    ("haw", "Tiếng Hawaii"),
    ("he", "Tiếng Do Thái"),
    ("hi", "Tiếng Hindi"),
    ("hr", "Tiếng Croatia"),
    ("ht", "Tiếng Haiti"),
    ("hu", "Tiếng Hungary"),
    ("hy", "Tiếng Armenia"),
    ("id", "Tiếng Indonesia"),
    ("is", "Tiếng Iceland"),
    ("it", "Tiếng Ý"),
    ("ja", "Tiếng Nhật"),
    ("jw", "Tiếng Java"),
    ("ka", "Tiếng Gruzia"),
    ("kk", "Tiếng Kazakh"),
    ("km", "Tiếng Khmer"),
    ("kn", "Tiếng Kannada"),
    ("ko", "Tiếng Hàn"),
    ("la", "Tiếng Latin"),
    ("lb", "Tiếng Luxembourg"),
    ("ln", "Tiếng Lingala"),
    ("lo", "Tiếng Lào"),
    ("lt", "Tiếng Litva"),
    ("lv", "Tiếng Latvia"),
    ("mg", "Tiếng Malagasy"),
    ("mi", "Tiếng Maori"),
    ("mk", "Tiếng Macedonia"),
    ("ml", "Tiếng Malayalam"),
    ("mn", "Tiếng Mông Cổ"),
    ("mr", "Tiếng Marathi"),
    ("ms", "Tiếng Mã Lai"),
    ("mt", "Tiếng Malta"),
    ("my", "Tiếng Miến Điện"),
    ("ne", "Tiếng Nepal"),
    ("nl", "Tiếng Hà Lan"),
    ("nn", "Tiếng Nynorsk"),
    ("no", "Tiếng Na Uy"),
    ("oc", "Tiếng Occitan"),
    ("pa", "Tiếng Punjab"),
    ("pl", "Tiếng Ba Lan"),
    ("ps", "Tiếng Pashto"),
    ("pt", "Tiếng Bồ Đào Nha"),
    ("ro", "Tiếng Romania"),
    ("ru", "Tiếng Nga"),
    ("sa", "Tiếng Phạn"),
    ("sd", "Tiếng Sindhi"),
    ("si", "Tiếng Sinhala"),
    ("sk", "Tiếng Slovakia"),
    ("sl", "Tiếng Slovenia"),
    ("sn", "Tiếng Shona"),
    ("so", "Tiếng Somali"),
    ("sq", "Tiếng Albania"),
    ("sr", "Tiếng Serbia"),
    ("su", "Tiếng Sundan"),
    ("sv", "Tiếng Thụy Điển"),
    ("sw", "Tiếng Swahili"),
    ("ta", "Tiếng Tamil"),
    ("te", "Tiếng Telugu"),
    ("tg", "Tiếng Tajik"),
    ("th", "Tiếng Thái"),
    ("tk", "Tiếng Turkmen"),
    ("tl", "Tiếng Tagalog"),
    ("tr", "Tiếng Thổ Nhĩ Kỳ"),
    ("tt", "Tiếng Tatar"),
    ("uk", "Tiếng Ukraina"),
    ("ur", "Tiếng Urdu"),
    ("uz", "Tiếng Uzbek"),
    ("vi", "Tiếng Việt"),
    ("yi", "Tiếng Yiddish"),
    ("yo", "Tiếng Yoruba"),
    ("yue", "Tiếng Quảng Đông"),
    ("zh", "Tiếng Trung"),
    ("zu", "Tiếng Zulu"),
];

pub fn language_label(code: &str) -> &'static str {
    LANGUAGES
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|i| LANGUAGES[i].1)
        .unwrap_or(UNKNOWN_LANGUAGE)
}
