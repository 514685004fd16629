use candle_core::Device;

use super::extractor::CategoryExtractor;
use super::pipeline::AnnotationPipeline;
use super::scorer::ModelScorer;
use crate::models::{LexiconScorer, ModernBertSize, SentimentModernBert};

/// Which scorer the pipeline is built around. Chosen at construction; the
/// pipeline never switches scorers afterwards.
#[derive(Debug, Clone, Copy)]
enum ScorerChoice {
    Lexicon,
    ModernBert(ModernBertSize),
}

/// Device selection for the learned scorer.
enum DeviceRequest {
    Default,
    Cpu,
    Cuda(usize),
    Explicit(Device),
}

impl DeviceRequest {
    fn resolve(self) -> anyhow::Result<Device> {
        match self {
            DeviceRequest::Default => Ok(Device::cuda_if_available(0)?),
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(index) => Ok(Device::new_cuda(index)?),
            DeviceRequest::Explicit(device) => Ok(device),
        }
    }
}

/// Builder for [`AnnotationPipeline`].
///
/// The scorer is picked by the constructor (`lexicon` or `modernbert`);
/// device methods only affect the learned scorer. A ModernBERT pipeline
/// whose model fails to load still builds: it runs on the lexicon
/// fallback for its lifetime, which is logged, not surfaced.
pub struct AnnotationPipelineBuilder {
    choice: ScorerChoice,
    device_request: DeviceRequest,
}

impl AnnotationPipelineBuilder {
    /// A pipeline scored by the deterministic lexicon scorer.
    pub fn lexicon() -> Self {
        Self {
            choice: ScorerChoice::Lexicon,
            device_request: DeviceRequest::Default,
        }
    }

    /// A pipeline scored by the ModernBERT sentiment classifier.
    pub fn modernbert(size: ModernBertSize) -> Self {
        Self {
            choice: ScorerChoice::ModernBert(size),
            device_request: DeviceRequest::Default,
        }
    }

    pub fn cpu(mut self) -> Self {
        self.device_request = DeviceRequest::Cpu;
        self
    }

    pub fn cuda_device(mut self, index: usize) -> Self {
        self.device_request = DeviceRequest::Cuda(index);
        self
    }

    pub fn device(mut self, device: Device) -> Self {
        self.device_request = DeviceRequest::Explicit(device);
        self
    }

    pub fn build(self) -> anyhow::Result<AnnotationPipeline> {
        let scorer: Box<dyn super::scorer::SentimentScorer> = match self.choice {
            ScorerChoice::Lexicon => Box::new(LexiconScorer::new()),
            ScorerChoice::ModernBert(size) => {
                let device = self.device_request.resolve()?;
                Box::new(ModelScorer::new(SentimentModernBert::load(size, device)))
            }
        };
        Ok(AnnotationPipeline {
            scorer,
            extractor: CategoryExtractor::new(),
        })
    }
}
