//! ModernBERT sequence-classification backend for sentiment scoring.
//!
//! Downloads config, weights and tokenizer from the Hugging Face hub,
//! builds the classifier on the requested device, and answers one question:
//! the probability that a text is positive. Inputs longer than the model's
//! position window are truncated by the tokenizer, never rejected.

use std::collections::HashMap;

use anyhow::{Error as E, Result};
use candle_core::{DType, Device, Tensor, D};
use candle_nn::{ops::softmax, VarBuilder};
use candle_transformers::models::modernbert::{
    self, ClassifierConfig, ClassifierPooling, ModernBertForSequenceClassification,
};
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;

use super::InferenceBackend;

/// Available sizes of the sentiment ModernBERT model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModernBertSize {
    Base,
    Large,
}

impl ModernBertSize {
    fn model_id(self) -> &'static str {
        match self {
            ModernBertSize::Base => "clapAI/modernBERT-base-multilingual-sentiment",
            ModernBertSize::Large => "clapAI/modernBERT-large-multilingual-sentiment",
        }
    }
}

/// A loaded sentiment classifier: model, tokenizer and the resolved index
/// of the positive label.
pub struct SentimentModernBert {
    model: ModernBertForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    positive_index: usize,
}

impl SentimentModernBert {
    /// Fetch and build the classifier. Any failure here is reported to the
    /// caller; the scorer wrapping this backend turns it into a permanent
    /// lexicon fallback rather than an error.
    pub fn load(size: ModernBertSize, device: Device) -> Result<Self> {
        let model_id = size.model_id().to_string();

        let api = Api::new()?;
        let repo = api.repo(Repo::new(model_id.clone(), RepoType::Model));

        let config_filename = repo.get("config.json")?;
        let weights_filename = match repo.get("model.safetensors") {
            Ok(safetensors) => safetensors,
            Err(_) => match repo.get("pytorch_model.bin") {
                Ok(pytorch_model) => pytorch_model,
                Err(e) => {
                    anyhow::bail!(
                        "Model weights not found in repo {}. Expected `model.safetensors` or `pytorch_model.bin`. Error: {e}",
                        model_id
                    )
                }
            },
        };

        let config_content = std::fs::read_to_string(&config_filename).map_err(|e| {
            E::msg(format!(
                "Failed to read config file {config_filename:?}: {e}"
            ))
        })?;

        // Classification metadata comes from the same JSON as the model config.
        #[derive(serde::Deserialize)]
        struct ClassifierConfigRaw {
            id2label: HashMap<String, String>,
        }
        let class_cfg: ClassifierConfigRaw = serde_json::from_str(&config_content)
            .map_err(|e| E::msg(format!("Failed to parse classifier config: {e}")))?;
        let id2label = class_cfg.id2label;
        let positive_index = resolve_positive_index(&id2label);

        let mut config: modernbert::Config = serde_json::from_str(&config_content)
            .map_err(|e| E::msg(format!("Failed to parse model config: {e}")))?;
        // Inject classification metadata so the head builds with the correct
        // class count and pooling.
        let label2id = id2label
            .iter()
            .map(|(id, label)| (label.clone(), id.clone()))
            .collect();
        let pooling = config
            .classifier_config
            .as_ref()
            .map(|c| c.classifier_pooling)
            .unwrap_or(ClassifierPooling::MEAN);
        config.classifier_config = Some(ClassifierConfig {
            id2label,
            label2id,
            classifier_pooling: pooling,
        });

        let dtype = DType::F32;
        let vb = if weights_filename
            .extension()
            .is_some_and(|ext| ext == "safetensors")
        {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_filename], dtype, &device)? }
        } else if weights_filename.extension().is_some_and(|ext| ext == "bin") {
            VarBuilder::from_pth(&weights_filename, dtype, &device)?
        } else {
            anyhow::bail!("Unsupported weight file format: {:?}", weights_filename);
        };

        let model = ModernBertForSequenceClassification::load(vb, &config)?;

        let tokenizer_filename = repo.get("tokenizer.json")?;
        let mut tokenizer = Tokenizer::from_file(tokenizer_filename)
            .map_err(|e| anyhow::anyhow!("Failed to load tokenizer: {e}"))?;
        // Truncate at the position window instead of rejecting long comments.
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: config.max_position_embeddings,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("Failed to configure truncation: {e}"))?;

        debug!(model_id, positive_index, "sentiment classifier loaded");

        Ok(Self {
            model,
            tokenizer,
            device,
            positive_index,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }
}

impl InferenceBackend for SentimentModernBert {
    /// Positive-label probability for one text, in [0, 1].
    ///
    /// A single fallible, synchronous call: hosts that need a deadline wrap
    /// this invocation with their own timeout or cancellation.
    fn positive_probability(&self, text: &str) -> Result<f32> {
        let tokens = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| E::msg(format!("Tokenization error: {e}")))?;
        let token_ids = tokens.get_ids();
        let attention_mask_vals = tokens.get_attention_mask();

        let input_ids = Tensor::new(&token_ids[..], &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(&attention_mask_vals[..], &self.device)?.unsqueeze(0)?;

        let logits = self.model.forward(&input_ids, &attention_mask)?;
        let probabilities = softmax(&logits, D::Minus1)?
            .squeeze(0)?
            .to_vec1::<f32>()?;

        probabilities
            .get(self.positive_index)
            .copied()
            .ok_or_else(|| {
                E::msg(format!(
                    "Positive label index {} out of range for {} classes",
                    self.positive_index,
                    probabilities.len()
                ))
            })
    }
}

/// Find the index of the "positive" label in the classifier's label map,
/// falling back to the highest index when the map does not name one.
fn resolve_positive_index(id2label: &HashMap<String, String>) -> usize {
    id2label
        .iter()
        .find(|(_, label)| label.eq_ignore_ascii_case("positive"))
        .and_then(|(id, _)| id.parse().ok())
        .unwrap_or_else(|| id2label.len().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_index_resolved_from_labels() {
        let labels: HashMap<String, String> = [
            ("0".to_string(), "negative".to_string()),
            ("1".to_string(), "positive".to_string()),
        ]
        .into();
        assert_eq!(resolve_positive_index(&labels), 1);
    }

    #[test]
    fn positive_index_defaults_to_last_label() {
        let labels: HashMap<String, String> = [
            ("0".to_string(), "LABEL_0".to_string()),
            ("1".to_string(), "LABEL_1".to_string()),
            ("2".to_string(), "LABEL_2".to_string()),
        ]
        .into();
        assert_eq!(resolve_positive_index(&labels), 2);
    }
}
