/// A devotional text: Arabic source, Bengali transliteration and meaning.
#[derive(Debug, Clone)]
pub struct Dua {
    pub title: &'static str,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
}

/// Builtin devotional set shipped with the application.
pub fn builtin() -> Vec<Dua> {
    vec![
        Dua {
            title: "রোজার নিয়ত",
            arabic: "نويت أن أصوم غدا من شهر رمضان المبارك فرضا لك يا الله فتقبل مني إنك أنت السميع العليم",
            transliteration: "নাওয়াইতু আন আসুমা গাদান মিন শাহরি রামাদ্বানাল মুবারাকি ফারদ্বান লাকা ইয়া আল্লাহু ফাতাকাব্বাল মিন্নি ইন্নাকা আনতাস সামিউল আলিম।",
            translation: "হে আল্লাহ! আগামীকাল পবিত্র রমজান মাসে তোমার পক্ষ থেকে নির্ধারিত ফরজ রোজা রাখার নিয়ত করলাম। অতএব তুমি আমার পক্ষ থেকে তা কবুল করো। নিশ্চয়ই তুমি সর্বশ্রোতা ও সর্বজ্ঞ।",
        },
        Dua {
            title: "ইফতারের দোয়া",
            arabic: "اللهم لك صمت وعلى رزقك أفطرت",
            transliteration: "আল্লাহুম্মা লাকা সুমতু ওয়া আলা রিজকিকা আফতারতু।",
            translation: "হে আল্লাহ! আমি তোমারই সন্তুষ্টির জন্য রোজা রেখেছি এবং তোমারই দেয়া রিজিক দ্বারা ইফতার করছি।",
        },
    ]
}
