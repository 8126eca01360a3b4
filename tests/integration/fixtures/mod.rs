// Test fixtures with known texts, rule files and service responses
// WHY: Deterministic input/output pairs shared by several integration tests

/// Sentence used throughout the examples of the correction service
pub const GREETING_TEXT: &str = "안녕 하세오 오늘 날씨가좋습니다";

/// Expected corrected text for GREETING_TEXT under the built-in rules
pub const GREETING_CORRECTED: &str = "안녕 하세요 오늘 날씨가 좋습니다";

/// Rule file equivalent to the built-in rules plus one templated rule
pub const RULES_TOML: &str = r#"
[[rules]]
pattern = "하세오"
replacement = "하세요"
category = "spelling"
message = "‘하세요’가 바른 표기예요."

[[rules]]
pattern = '날씨가\s*좋습니다'
replacement = "날씨가 좋습니다"
category = "spacing"
message = "띄어쓰기를 교정했어요."

[[rules]]
pattern = '(\d+)개'
replacement = "$1 개"
category = "spacing"
message = "단위 명사는 띄어 써요."
"#;

/// Rule file with a malformed second rule
pub const BROKEN_RULES_JSON: &str = r#"[
    {"pattern": "하세오", "replacement": "하세요", "category": "spelling"},
    {"pattern": "[unclosed", "replacement": "x", "category": "grammar"}
]"#;

/// Rule file whose replacement names a group the pattern lacks
pub const DANGLING_GROUP_RULES_TOML: &str = r#"
[[rules]]
pattern = '(\d+)개'
replacement = "$5 개"
category = "spacing"
"#;

/// Rule file whose pattern matches the empty string
pub const EMPTY_MATCH_RULES_TOML: &str = r#"
[[rules]]
pattern = "x*"
replacement = "y"
category = "etc"
"#;

/// Substring-based service response whose only item lacks `type`
pub const MALFORMED_PIPELINE_RESPONSE: &str = r#"{
    "original_text": "안녕 하세오",
    "corrected_text": "안녕 하세요",
    "corrections": [{"original": "하세오", "corrected": "하세요"}]
}"#;

/// Offset-based service response with an overlapping and an out-of-range error
pub const SPELL_RESPONSE: &str = r#"{
    "original_text": "안녕 하세오 오늘 날씨가좋습니다",
    "corrected_text": "안녕 하세요 오늘 날씨가 좋습니다",
    "errors": [
        {"type": "spacing", "offset": 10, "length": 7,
         "message": "띄어쓰기를 교정했어요.", "suggestion": "날씨가 좋습니다"},
        {"type": "spelling", "offset": 3, "length": 3,
         "message": "‘하세요’가 바른 표기예요.", "suggestion": "하세요"},
        {"type": "recommendation", "offset": 12, "length": 2, "message": "겹치는 제안"},
        {"type": "grammar", "offset": 40, "length": 3, "message": "범위 밖"}
    ]
}"#;

/// Substring-based service response
pub const PIPELINE_RESPONSE: &str = r#"{
    "original_text": "안녕 하세오 오늘 날씨가좋습니다",
    "corrected_text": "안녕하세요. 오늘 날씨가 좋습니다.",
    "corrections": [
        {"original": "하세오", "corrected": "하세요", "type": "타이포/띄어쓰기"},
        {"original": "날씨가좋습니다", "corrected": "날씨가 좋습니다", "type": "문법/자연스러움"}
    ],
    "stage_texts": {
        "step1": "안녕 하세요 오늘 날씨가 좋습니다",
        "final": "안녕하세요. 오늘 날씨가 좋습니다."
    }
}"#;
