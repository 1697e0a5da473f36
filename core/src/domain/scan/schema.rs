use serde_json::json;

/// Response schema handed to the model for label scans.
pub fn get_scan_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "productName": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "isMammalBased": { "type": "boolean" },
                        "category": { "type": "string" },
                        "explanation": { "type": "string" },
                        "requiresCaution": { "type": "boolean" },
                        "allergenIds": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "isAllergen": { "type": "boolean" }
                    },
                    "required": ["name", "isMammalBased"]
                }
            },
            "overallSafety": {
                "type": "string",
                "enum": ["safe", "caution", "unsafe"]
            }
        },
        "required": ["ingredients", "overallSafety"]
    })
}
