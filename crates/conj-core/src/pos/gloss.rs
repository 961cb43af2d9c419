/// English label for a JMdict part-of-speech or misc tag, as shown next to
/// a headword. `None` for tags without a label.
pub fn gloss(tag: &str) -> Option<&'static str> {
    let label = match tag {
        "adj-kari" => "adj. かり (archaic)",
        "adj-ku" => "adj. く (archaic)",
        "adj-nari" => "adj. なり (archaic/formal)",
        "adj-shiku" => "adj. しく (archaic)",
        "adj-f" => "n. or v. (prenominal)",
        "adj-i" => "adj.",
        "adj-ix" => "adj. (良い・いい)",
        "adj-na" => "adj-n. or quasi-adjective",
        "adj-no" => "may take possessive の",
        "adj-pn" => "adj-pre-n.",
        "adj-t" => "adj. 〜たる",
        "adv" => "adv.",
        "adv-to" => "adv. taking the と particle",
        "aux" => "aux.",
        "aux-adj" => "aux. adj.",
        "aux-v" => "aux. v.",
        "conj" => "conj.",
        "cop-da" => "copula",
        "ctr" => "counter",
        "int" => "interjection",
        "n" => "n.",
        "n-adv" => "n. (adverbial)",
        "n-pr" => "n. (proper)",
        "n-pref" => "n. (as prefix)",
        "n-suf" => "n. (as suffix)",
        "n-t" => "n. (temporal)",
        "pn" => "pronoun",
        "prt" => "particle",
        "pref" => "prefix",
        "suf" => "suffix",
        "iv" => "v. (irr.)",
        "vn" => "v. (irr.)",
        "vr" => "v. (irr.), plain form ends with 〜り",
        "vk" => "v. くる (special)",
        "vs-s" => "v. する (special)",
        "vs-i" => "v. する (irr.)",
        "vs" => "takes する",
        "vs-c" => "precursor to modern する",
        "vi" => "intransitive",
        "vt" => "transitive",
        "v-unspec" => "unspecified",
        "v1" => "v1.",
        "v1-s" => "v1. くれる (special)",
        "vz" => "v1. ずる (alternative form of -jiru verbs)",
        "v2a-s" => "v2d. (archaic)",
        "v2b-k" => "v2u. (archaic)",
        "v2b-s" => "v2d. (archaic)",
        "v2d-k" => "v2u. (archaic)",
        "v2d-s" => "v2d. (archaic)",
        "v2g-k" => "v2u. (archaic)",
        "v2g-s" => "v2d. (archaic)",
        "v2h-k" => "v2u. (archaic)",
        "v2h-s" => "v2d. (archaic)",
        "v2k-k" => "v2u. (archaic)",
        "v2k-s" => "v2d. (archaic)",
        "v2m-k" => "v2u. (archaic)",
        "v2m-s" => "v2d. (archaic)",
        "v2n-s" => "v2d. (archaic)",
        "v2r-k" => "v2u. (archaic)",
        "v2r-s" => "v2d. (archaic)",
        "v2s-s" => "v2d. (archaic)",
        "v2t-k" => "v2u. (archaic)",
        "v2t-s" => "v2d. (archaic)",
        "v2w-s" => "v2d. (archaic) (ゑ conjugation)",
        "v2y-k" => "v2u. (archaic)",
        "v2y-s" => "v2d. (archaic)",
        "v2z-s" => "v2d. (archaic)",
        "v4b" => "v4. (archaic)",
        "v4g" => "v4. (archaic)",
        "v4h" => "v4. (archaic)",
        "v4k" => "v4. (archaic)",
        "v4m" => "v4. (archaic)",
        "v4n" => "v4. (archaic)",
        "v4r" => "v4. (archaic)",
        "v4s" => "v4. (archaic)",
        "v4t" => "v4. (archaic)",
        "v5aru" => "v5. (special)",
        "v5b" => "v5.",
        "v5g" => "v5.",
        "v5k" => "v5.",
        "v5k-s" => "v5. Iku/Yuku (special)",
        "v5m" => "v5.",
        "v5n" => "v5.",
        "v5r" => "v5.",
        "v5r-i" => "v5. (irr.)",
        "v5s" => "v5.",
        "v5t" => "v5.",
        "v5u" => "v5.",
        "v5u-s" => "v5. (special)",
        "v5uru" => "v5. Uru (old, Eru)",
        "anat" => "anatomy",
        "archit" => "architecture",
        "astron" => "astronomy",
        "baseb" => "baseball",
        "biol" => "biology",
        "bot" => "botany",
        "bus" => "business",
        "econ" => "economics",
        "engr" => "engineering",
        "finc" => "finance",
        "geol" => "geology",
        "joc" => "jocular",
        "law" => "law",
        "mahj" => "mahjong",
        "med" => "medical",
        "music" => "music",
        "Shinto" => "Shinto",
        "shogi" => "shogi",
        "sports" => "sports",
        "sumo" => "sumo",
        "zool" => "zoology",
        "Buddh" => "Buddhist",
        "chem" => "chemistry",
        "chn" => "childish",
        "comp" => "technology",
        "MA" => "martial arts",
        "ling" => "linguistics",
        "proverb" => "proverb",
        "physics" => "physics",
        "derog" => "derogatory",
        "math" => "math",
        "mil" => "military",
        "food" => "food",
        "geom" => "geometry",
        "poet" => "poetic",
        "num" => "numeric",
        "fem" => "female",
        "male" => "male",
        "sl" => "slang",
        "m-sl" => "manga slang",
        "male-sl" => "male slang",
        "pol" => "polite",
        "hon" => "respectful",
        "hum" => "humble",
        "vulg" => "vulgar",
        "X" => "rude or X-rated",
        "eK" => "kanji excl.",
        "uK" => "kanji usu.",
        "ek" => "kana excl.",
        "uk" => "kana usu.",
        "iK" => "irr. kanji",
        "ik" => "irr. kana",
        "io" => "irr. okurigana",
        "ok" => "out-dated kana",
        "oK" => "out-dated kanji",
        "oik" => "old or irr. kana",
        "ateji" => "phonetic",
        "gikun" => "special reading",
        "kyb" => "Kyoto",
        "osb" => "Osaka",
        "ksb" => "Kansai",
        "ktb" => "Kanto",
        "tsb" => "Tosa",
        "thb" => "Tohoku",
        "tsug" => "Tsugaru",
        "kyu" => "Kyushu",
        "rkb" => "Ryukyu",
        "nab" => "Nagano",
        "hob" => "Hokkaido",
        "abbr" => "abbr.",
        "quote" => "quotation",
        "sens" => "sensitive",
        "on-mim" => "onomatopoeia",
        "exp" => "expression",
        "fam" => "familiar",
        "col" => "colloq.",
        "id" => "idiomatic",
        "obs" => "obsolete",
        "obsc" => "obscure",
        "arch" => "archaism",
        "rare" => "rare",
        "yoji" => "4-character phrase",
        "unc" => "unclassified",
        _ => return None,
    };
    Some(label)
}
