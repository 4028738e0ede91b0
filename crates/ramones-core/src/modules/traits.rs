use crate::domain::{ComputeResult, SynthesisArtifact, SynthesisRequest};

pub trait ModuleExecutor {
    fn execute(&self, request: &SynthesisRequest) -> ComputeResult<Vec<SynthesisArtifact>>;
}

#[cfg(test)]
mod tests {
    use super::ModuleExecutor;
    use crate::domain::{
        ComputeResult, RamonesError, RamonesErrorCategory, SynthesisArtifact,
        SynthesisParameters, SynthesisRequest,
    };

    struct FailingExecutor;

    impl ModuleExecutor for FailingExecutor {
        fn execute(&self, _request: &SynthesisRequest) -> ComputeResult<Vec<SynthesisArtifact>> {
            Err(RamonesError::computation(
                "RUN.MODULE",
                "module execution failed",
            ))
        }
    }

    #[test]
    fn module_executor_uses_shared_error_types() {
        let request = SynthesisRequest::new("calc.log", "out", SynthesisParameters::default());
        let error = FailingExecutor
            .execute(&request)
            .expect_err("executor should fail");
        assert_eq!(error.category(), RamonesErrorCategory::ComputationError);
        assert_eq!(error.exit_code(), 4);
        assert_eq!(error.placeholder(), "RUN.MODULE");
    }
}
