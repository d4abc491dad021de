use super::PatchType;

/// Overrides a rule's default type when both the subject and one of the
/// trigger words appear in the text. "冷却" + "延长" is a nerf even though
/// "延长" sits in the buff keyword list, and so on.
struct Exception {
    subject: &'static str,
    triggers: &'static [&'static str],
    result: PatchType,
}

/// One branch of the classifier: a keyword list, the exceptions that can
/// flip its verdict, and the type it yields otherwise.
struct Rule {
    keywords: &'static [&'static str],
    exceptions: &'static [Exception],
    default: PatchType,
}

/// Evaluated in order; first rule with a keyword hit wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["提高", "增加", "加快", "延长", "扩大", "提升"],
        exceptions: &[
            // A damage decrease is a nerf no matter which keyword matched
            Exception {
                subject: "伤害",
                triggers: &["降低", "减少"],
                result: PatchType::Nerf,
            },
            // A longer cooldown is a nerf
            Exception {
                subject: "冷却",
                triggers: &["延长"],
                result: PatchType::Nerf,
            },
        ],
        default: PatchType::Buff,
    },
    Rule {
        keywords: &["降低", "减少", "缩短", "减缓", "削弱"],
        exceptions: &[
            // A shorter cooldown is a buff
            Exception {
                subject: "冷却",
                triggers: &["缩短", "减少", "降低"],
                result: PatchType::Buff,
            },
        ],
        default: PatchType::Nerf,
    },
];

/// Best-effort keyword classification of a patch line. Lines with mixed or
/// absent signals fall through to `Update`.
pub fn classify(content: &str) -> PatchType {
    for rule in RULES {
        if !rule.keywords.iter().any(|k| content.contains(k)) {
            continue;
        }
        for exception in rule.exceptions {
            if content.contains(exception.subject)
                && exception.triggers.iter().any(|t| content.contains(t))
            {
                return exception.result;
            }
        }
        return rule.default;
    }
    PatchType::Update
}
