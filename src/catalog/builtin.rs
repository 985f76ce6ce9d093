use super::types::{Catalog, PreventionFactor, RiskFactor};

const RISK_FACTORS: &[(&str, &str, f64)] = &[
    ("education", "低教育（教育年数12年未満・中卒）", 1.6),
    ("headInjury", "頭部外傷", 1.7),
    ("exercise", "運動不足（高負荷の運動75分未満）", 1.2),
    ("smoking", "喫煙", 1.3),
    ("alcohol", "飲酒（1日缶ビール2缶以上）", 1.2),
    ("hypertension", "高血圧（収縮期血圧130以上）", 1.2),
    ("obesity", "肥満（BMI 30以上）", 1.3),
    ("diabetes", "糖尿病", 1.7),
    ("hearingLoss", "聴力低下（良音聴力が35dB以上）", 1.4),
    ("depression", "うつ病", 2.2),
    ("socialIsolation", "社会的孤立（2項目以上該当）", 1.6),
    (
        "airPollution",
        "大気汚染（PM2.5年平均>5 μg/m³、NO2年平均>10 μg/m³）",
        1.1,
    ),
    ("vision", "視力（良眼視力が0.5未満）", 1.5),
    ("highLDL", "高LDL（LDL120以上）", 1.3),
];

const PREVENTION_FACTORS: &[(&str, &str, f64)] = &[
    ("intellectual", "知的活動（読書・チェス等）", 0.56),
    ("elderlyObesity", "後期高齢者の肥満是正", 0.8),
    (
        "homocysteine",
        "高ホモシステイン血症の改善（葉酸/ビタミンB12/ビタミンB6の補充）",
        0.78,
    ),
    ("depressionTreatment", "うつ病の治療", 0.62),
    ("stressReduction", "ストレス軽減", 0.78),
    ("diabetesTreatment", "糖尿病治療", 0.7),
    ("headInjuryPrevention", "頭部外傷防止", 0.6),
    ("midlifeHypertension", "中年期の高血圧治療", 0.75),
    ("hypotension", "起立性低血圧の改善", 0.74),
    ("midlifeObesity", "中年期の肥満改善", 0.85),
    ("elderlyWeightLoss", "後期高齢者の軽度減量（5%の体重減少）", 0.9),
    ("exercise", "運動", 0.72),
    ("smokingCessation", "禁煙（禁煙は数年）", 0.88),
    ("sleepImprovement", "睡眠障害の改善（6時間以上10時間未満）", 0.85),
    (
        "cerebrovascular",
        "脳血管疾患の防止（抗血小板薬・血圧・脂質管理など）",
        0.75,
    ),
    ("frailtyPrevention", "フレイル防止（栄養+運動+社会参加）", 0.7),
    ("atrialFib", "心房細動の治療（抗凝固療法）", 0.8),
    ("vitaminC", "ビタミンC（抗酸化作用）", 0.9),
    ("shinglesVaccine", "帯状疱疹ワクチン", 0.8),
    ("alcoholReduction", "飲酒量の低下（缶ビール1日1缶まで）", 0.8),
    ("pm25Reduction", "PM2.5高曝露の回避（10 μg/m³低下）", 0.83),
    ("statinCorrection", "スタチンでの是正", 0.64),
    ("hearingAid", "補聴器", 0.8),
    ("visionCorrection", "視力矯正（特に白内障手術）", 0.8),
];

/// The catalog shipped with the binary. Ids and weights are fixed; custom
/// catalogs exported from this one start out identical.
pub fn builtin_catalog() -> Catalog {
    Catalog {
        risks: RISK_FACTORS
            .iter()
            .map(|&(id, label, risk)| RiskFactor {
                id: id.to_string(),
                label: label.to_string(),
                risk,
            })
            .collect(),
        preventions: PREVENTION_FACTORS
            .iter()
            .map(|&(id, label, effect)| PreventionFactor {
                id: id.to_string(),
                label: label.to_string(),
                effect,
            })
            .collect(),
    }
}
