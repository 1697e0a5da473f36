use tracing::{debug, instrument, warn};

use crate::domain::{
    allergen::entities::AllergenDefinition,
    alternatives::safe_alternatives_for_scan,
    common::{entities::app_errors::CoreError, services::Service},
    ingredient_check::{entities::SafetyStatus, label_text::parse_ingredients_from_text},
    scan::{
        cache::{ScanCacheKey, ScanCacheStats},
        entities::{
            AnalysisSource, CrossCheckReport, ScanAnalysis, ScanReport, ScanResult, ScanSummary,
        },
        helpers::{cross_check, determine_overall_safety, ingredient_from_classification, share_text},
        parser::parse_scan_analysis,
        ports::{LLMClient, ScanService},
        prompt::{PromptSource, build_scan_prompt},
        schema::get_scan_analysis_schema,
        value_objects::{AnalyzeLabelInput, LabelInput, OutputLanguage},
    },
};

impl<LLM> ScanService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(allergens = input.allergen_ids.len()))]
    async fn analyze_label(&self, input: AnalyzeLabelInput) -> Result<ScanReport, CoreError> {
        match &input.label {
            LabelInput::Text(text) if text.trim().is_empty() => {
                return Err(CoreError::InvalidInput("label text is empty".to_string()));
            }
            LabelInput::Image { data, .. } if data.is_empty() => {
                return Err(CoreError::InvalidInput("label image is empty".to_string()));
            }
            _ => {}
        }

        let language = input
            .language
            .unwrap_or(self.scan_config.default_language);

        let cache_key = ScanCacheKey::new(&input.label, &input.allergen_ids, language);
        if let Some(cached) = self.scan_cache.get(&cache_key).await {
            debug!(key = cache_key.as_str(), "using cached label analysis");
            return Ok(ScanReport {
                scan: cached.scan.reissued(),
                from_cache: true,
                ..cached
            });
        }

        let allergens: Vec<&AllergenDefinition> = input
            .allergen_ids
            .iter()
            .filter_map(|id| self.registry.get_by_id(id))
            .collect();

        let (source, label_text) = match &input.label {
            LabelInput::Image { .. } => (PromptSource::Image, None),
            LabelInput::Text(text) => (PromptSource::Text, Some(text.as_str())),
        };
        let prompt = build_scan_prompt(&allergens, language, source, label_text);

        match self.request_analysis(&input.label, prompt).await {
            Ok(analysis) => {
                let report = self.report_from_model(analysis, &input, language);
                self.scan_cache.insert(cache_key, report.clone()).await;
                Ok(report)
            }
            Err(e) => {
                if self.scan_config.fallback_enabled
                    && let Some(text) = input.label.as_text()
                {
                    warn!(error = %e, "model unavailable, classifying label text locally");
                    return Ok(self.report_from_text(text, &input));
                }

                Err(e)
            }
        }
    }

    async fn scan_cache_stats(&self) -> ScanCacheStats {
        self.scan_cache.stats().await
    }

    #[instrument(skip(self))]
    async fn clear_scan_cache(&self) {
        self.scan_cache.clear().await;
        debug!("scan cache cleared");
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn request_analysis(
        &self,
        label: &LabelInput,
        prompt: String,
    ) -> Result<ScanAnalysis, CoreError> {
        let max_attempts = self.scan_config.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            debug!(attempt, max_attempts, "requesting label analysis");

            let response = match label {
                LabelInput::Image { data, mime_type } => {
                    self.llm_client
                        .generate_with_image(
                            prompt.clone(),
                            data.clone(),
                            mime_type.clone(),
                            get_scan_analysis_schema(),
                        )
                        .await
                }
                LabelInput::Text(_) => {
                    self.llm_client
                        .generate_with_text(prompt.clone(), get_scan_analysis_schema())
                        .await
                }
            };

            match response.and_then(|raw| parse_scan_analysis(&raw)) {
                Ok(analysis) => return Ok(analysis),
                Err(e) if e.is_retryable() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "label analysis failed, retrying");
                    tokio::time::sleep(self.scan_config.retry_delay(attempt)).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!("Label analysis failed after {} attempt(s): {}", attempt, e);
                    return Err(e);
                }
            }
        }
    }

    fn report_from_model(
        &self,
        analysis: ScanAnalysis,
        input: &AnalyzeLabelInput,
        language: OutputLanguage,
    ) -> ScanReport {
        let model_safety = analysis.overall_safety;
        let mut status = model_safety.worst(determine_overall_safety(&analysis.ingredients));

        // Keyword lists are English, translated names would only produce noise.
        let keyword_check = (self.scan_config.cross_check_enabled
            && language == OutputLanguage::English)
            .then(|| cross_check(self.classifier(), &analysis.ingredients, &input.allergen_ids));

        if let Some(report) = &keyword_check {
            if !report.agrees() {
                warn!(
                    disagreements = report.disagreements.len(),
                    deterministic = %report.deterministic_safety,
                    model = %model_safety,
                    "model and keyword check disagree"
                );
            }
            status = status.worst(report.deterministic_safety);
        }

        let product_name = analysis.product_name.or_else(|| input.product_name.clone());
        let scan = ScanResult::new(
            status,
            analysis.ingredients,
            product_name,
            input.allergen_ids.clone(),
        );

        build_report(scan, AnalysisSource::Model, Some(model_safety), keyword_check)
    }

    fn report_from_text(&self, text: &str, input: &AnalyzeLabelInput) -> ScanReport {
        let names = parse_ingredients_from_text(text);
        let aggregate = self
            .classifier()
            .analyze_ingredients(&names, &input.allergen_ids);

        let ingredients = aggregate
            .ingredients
            .iter()
            .map(|result| ingredient_from_classification(result, &self.registry))
            .collect();
        let scan = ScanResult::new(
            aggregate.overall_safety,
            ingredients,
            input.product_name.clone(),
            input.allergen_ids.clone(),
        );

        build_report(scan, AnalysisSource::Deterministic, None, None)
    }
}

fn build_report(
    scan: ScanResult,
    source: AnalysisSource,
    model_safety: Option<SafetyStatus>,
    cross_check: Option<CrossCheckReport>,
) -> ScanReport {
    let summary = ScanSummary::from(&scan);
    let share_text = share_text(&scan);
    let alternatives = safe_alternatives_for_scan(&scan.ingredients, &scan.scanned_for_allergens);

    ScanReport {
        scan,
        source,
        from_cache: false,
        model_safety,
        cross_check,
        summary,
        share_text,
        alternatives,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::Sequence;

    use super::*;
    use crate::domain::{
        allergen::registry::AllergenRegistry, common::ScanConfig, scan::ports::MockLLMClient,
    };

    const GUMMIES: &str = r#"Sure! {
        "productName": "Fruit Gummies",
        "ingredients": [
            {"name": "sugar", "isMammalBased": false, "allergenIds": [], "isAllergen": false},
            {"name": "gelatin", "isMammalBased": true, "allergenIds": ["alpha-gal"], "isAllergen": true},
            {"name": "natural flavors", "isMammalBased": false, "requiresCaution": true}
        ],
        "overallSafety": "unsafe"
    }"#;

    const ALL_SAFE_BUT_GELATIN: &str = r#"{
        "ingredients": [
            {"name": "water", "isMammalBased": false},
            {"name": "gelatin", "isMammalBased": false}
        ],
        "overallSafety": "safe"
    }"#;

    fn config() -> ScanConfig {
        ScanConfig {
            retry_delay_ms: 0,
            ..ScanConfig::default()
        }
    }

    fn service(llm: MockLLMClient, config: ScanConfig) -> Service<MockLLMClient> {
        Service::new(Arc::new(AllergenRegistry::builtin().unwrap()), llm, config)
    }

    fn text_input(text: &str) -> AnalyzeLabelInput {
        AnalyzeLabelInput {
            label: LabelInput::Text(text.to_string()),
            allergen_ids: vec!["alpha-gal".to_string()],
            language: None,
            product_name: None,
        }
    }

    fn image_input() -> AnalyzeLabelInput {
        AnalyzeLabelInput {
            label: LabelInput::Image {
                data: vec![1, 2, 3],
                mime_type: "image/png".to_string(),
            },
            allergen_ids: vec!["alpha-gal".to_string()],
            language: None,
            product_name: None,
        }
    }

    #[tokio::test]
    async fn test_image_scan_uses_model_answer() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, data, mime_type, _| {
                prompt.contains("ALPHA-GAL ALLERGY:") && data == &vec![1, 2, 3] && mime_type == "image/png"
            })
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let report = service(llm, config())
            .analyze_label(image_input())
            .await
            .unwrap();

        assert_eq!(report.source, AnalysisSource::Model);
        assert_eq!(report.model_safety, Some(SafetyStatus::Unsafe));
        assert_eq!(report.scan.status, SafetyStatus::Unsafe);
        assert!(!report.scan.is_safe);
        assert_eq!(report.scan.product_name.as_deref(), Some("Fruit Gummies"));
        assert_eq!(report.scan.scanned_for_allergens, vec!["alpha-gal"]);
        assert_eq!(report.summary.unsafe_count, 1);
        assert_eq!(report.summary.caution_count, 1);
        assert_eq!(report.alternatives.len(), 1);
        assert_eq!(report.alternatives[0].ingredient, "gelatin");
        assert!(report.cross_check.unwrap().agrees());
    }

    #[tokio::test]
    async fn test_retries_after_upstream_error() {
        let mut llm = MockLLMClient::new();
        let mut seq = Sequence::new();
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| {
                Box::pin(async { Err(CoreError::ExternalServiceError("timeout".to_string())) })
            });
        llm.expect_generate_with_image()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let report = service(llm, config())
            .analyze_label(image_input())
            .await
            .unwrap();
        assert_eq!(report.scan.ingredients.len(), 3);
    }

    #[tokio::test]
    async fn test_malformed_answer_is_retried_then_surfaced() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(2)
            .returning(|_, _, _, _| Box::pin(async { Ok("no json here".to_string()) }));

        let result = service(llm, config()).analyze_label(image_input()).await;
        assert!(matches!(result, Err(CoreError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_non_retryable_error_fails_fast() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Err(CoreError::Invalid) }));

        let result = service(llm, config()).analyze_label(image_input()).await;
        assert_eq!(result.unwrap_err(), CoreError::Invalid);
    }

    #[tokio::test]
    async fn test_cross_check_raises_status() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(ALL_SAFE_BUT_GELATIN.to_string()) }));

        let report = service(llm, config())
            .analyze_label(text_input("water, gelatin"))
            .await
            .unwrap();

        assert_eq!(report.model_safety, Some(SafetyStatus::Safe));
        assert_eq!(report.scan.status, SafetyStatus::Unsafe);
        let cross_check = report.cross_check.unwrap();
        assert_eq!(cross_check.deterministic_safety, SafetyStatus::Unsafe);
        assert_eq!(cross_check.disagreements[0].ingredient, "gelatin");
    }

    #[tokio::test]
    async fn test_cross_check_skipped_for_translated_output() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(ALL_SAFE_BUT_GELATIN.to_string()) }));

        let mut input = text_input("water, gelatin");
        input.language = Some(OutputLanguage::Spanish);
        let report = service(llm, config()).analyze_label(input).await.unwrap();

        assert!(report.cross_check.is_none());
        assert_eq!(report.scan.status, SafetyStatus::Safe);
    }

    #[tokio::test]
    async fn test_text_scan_falls_back_to_keywords() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(2).returning(|_, _| {
            Box::pin(async { Err(CoreError::ServiceUnavailable("offline".to_string())) })
        });

        let mut input = text_input("Water, Sugar, Gelatin (bovine), Natural Flavors*");
        input.product_name = Some("Gummies".to_string());
        let report = service(llm, config()).analyze_label(input).await.unwrap();

        assert_eq!(report.source, AnalysisSource::Deterministic);
        assert_eq!(report.model_safety, None);
        assert_eq!(report.scan.status, SafetyStatus::Unsafe);
        assert_eq!(report.scan.product_name.as_deref(), Some("Gummies"));

        let names: Vec<&str> = report.scan.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Water", "Sugar", "Gelatin", "Natural Flavors"]);
        assert_eq!(
            report.scan.ingredients[2].allergen_ids,
            Some(vec!["alpha-gal".to_string()])
        );
        assert_eq!(report.summary.caution_count, 1);
        assert_eq!(report.alternatives[0].ingredient, "Gelatin");
    }

    #[tokio::test]
    async fn test_fallback_disabled_surfaces_error() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(1).returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });

        let config = ScanConfig {
            max_attempts: 1,
            fallback_enabled: false,
            ..config()
        };
        let result = service(llm, config)
            .analyze_label(text_input("water"))
            .await;
        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_image_scan_has_no_fallback() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().times(2).returning(|_, _, _, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });

        let result = service(llm, config()).analyze_label(image_input()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_label_is_rejected_before_model_call() {
        let llm = MockLLMClient::new();
        let service = service(llm, config());

        let result = service.analyze_label(text_input("   ")).await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));

        let mut input = image_input();
        input.label = LabelInput::Image {
            data: vec![],
            mime_type: "image/jpeg".to_string(),
        };
        assert!(matches!(
            service.analyze_label(input).await,
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_repeated_scan_is_served_from_cache() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let service = service(llm, config());
        let first = service.analyze_label(image_input()).await.unwrap();
        let second = service.analyze_label(image_input()).await.unwrap();

        assert!(!first.from_cache);
        assert!(second.from_cache);
        assert_ne!(second.scan.id, first.scan.id);
        assert_eq!(second.scan.status, first.scan.status);
        assert_eq!(second.scan.ingredients, first.scan.ingredients);
        assert_eq!(second.share_text, first.share_text);
        assert_eq!(service.scan_cache().len().await, 1);
    }

    #[tokio::test]
    async fn test_cache_key_includes_allergens() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(2)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let service = service(llm, config());
        service.analyze_label(image_input()).await.unwrap();

        let mut input = image_input();
        input.allergen_ids.push("dairy".to_string());
        let report = service.analyze_label(input).await.unwrap();

        assert!(!report.from_cache);
        assert_eq!(service.scan_cache().len().await, 2);
    }

    #[tokio::test]
    async fn test_fallback_reports_are_not_cached() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(2).returning(|_, _| {
            Box::pin(async { Err(CoreError::ServiceUnavailable("offline".to_string())) })
        });

        let config = ScanConfig {
            max_attempts: 1,
            ..config()
        };
        let service = service(llm, config);

        for _ in 0..2 {
            let report = service.analyze_label(text_input("water, gelatin")).await.unwrap();
            assert_eq!(report.source, AnalysisSource::Deterministic);
            assert!(!report.from_cache);
        }
        assert!(service.scan_cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_zero_capacity_disables_cache() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(2)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let config = ScanConfig {
            cache_capacity: 0,
            ..config()
        };
        let service = service(llm, config);

        for _ in 0..2 {
            assert!(!service.analyze_label(image_input()).await.unwrap().from_cache);
        }
    }

    #[tokio::test]
    async fn test_report_carries_share_text() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let report = service(llm, config())
            .analyze_label(image_input())
            .await
            .unwrap();

        assert!(report.share_text.starts_with("AlphaGo Scan Result ❌"));
        assert!(report.share_text.contains("Product: Fruit Gummies\n"));
        assert!(report.share_text.contains("❌ Unsafe Ingredients (1):\n  • gelatin\n"));
        assert!(report.share_text.contains("⚠️ Caution Required (1):\n  • natural flavors\n"));
    }

    #[tokio::test]
    async fn test_clear_scan_cache_forces_new_model_call() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .times(2)
            .returning(|_, _, _, _| Box::pin(async { Ok(GUMMIES.to_string()) }));

        let service = service(llm, config());
        service.analyze_label(image_input()).await.unwrap();
        assert_eq!(
            service.scan_cache_stats().await,
            ScanCacheStats {
                entries: 1,
                capacity: 50
            }
        );

        service.clear_scan_cache().await;
        assert_eq!(service.scan_cache_stats().await.entries, 0);

        let report = service.analyze_label(image_input()).await.unwrap();
        assert!(!report.from_cache);
    }
}
