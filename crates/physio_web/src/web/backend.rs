use gloo_net::http::{Request, RequestBuilder, Response};
use physio::protocol::{
    pose_rejection, CurrentPoseRequest, CurrentPoseResponse, Endpoint, Method,
    ScoringEffectResponse, UpdateScoreRequest, UpdateScoreResponse,
};
use physio::{ClientConfig, ClientError};
use serde::de::DeserializeOwned;

/// HTTP client for the pose backend. Every call is a single attempt.
#[derive(Debug, Clone)]
pub(super) struct BackendClient {
    config: ClientConfig,
}

impl BackendClient {
    pub(super) fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub(super) fn video_feed_url(&self) -> String {
        self.config.endpoint_url(Endpoint::VideoFeed)
    }

    fn request(&self, endpoint: Endpoint) -> RequestBuilder {
        let url = self.config.endpoint_url(endpoint);
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
    }

    pub(super) async fn scoring_effect(&self) -> Result<Option<i64>, ClientError> {
        let endpoint = Endpoint::ScoringEffect;
        let resp = self
            .request(endpoint)
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;
        let body: ScoringEffectResponse = decode(endpoint, resp).await?;
        Ok(body.scoring_effect)
    }

    pub(super) async fn update_score(
        &self,
        req: UpdateScoreRequest,
    ) -> Result<UpdateScoreResponse, ClientError> {
        let endpoint = Endpoint::UpdateScore;
        let resp = self
            .request(endpoint)
            .json(&req)
            .map_err(|e| transport(endpoint, e))?
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;
        decode(endpoint, resp).await
    }

    /// The reply body is not used; only a rejection is surfaced.
    pub(super) async fn report_pose(&self, req: CurrentPoseRequest) -> Result<(), ClientError> {
        let endpoint = Endpoint::CurrentPose;
        let resp = self
            .request(endpoint)
            .json(&req)
            .map_err(|e| transport(endpoint, e))?
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;

        let reply = resp.json::<CurrentPoseResponse>().await.ok();
        match pose_rejection(resp.ok(), resp.status(), reply) {
            None => Ok(()),
            Some(message) => Err(ClientError::Rejected { endpoint, message }),
        }
    }
}

async fn decode<T: DeserializeOwned>(endpoint: Endpoint, resp: Response) -> Result<T, ClientError> {
    if !resp.ok() {
        return Err(ClientError::Status {
            endpoint,
            status: resp.status(),
        });
    }
    resp.json::<T>().await.map_err(|e| match e {
        gloo_net::Error::SerdeError(e) => ClientError::Decode {
            endpoint,
            message: e.to_string(),
        },
        other => transport(endpoint, other),
    })
}

fn transport(endpoint: Endpoint, e: gloo_net::Error) -> ClientError {
    ClientError::Transport {
        endpoint,
        message: e.to_string(),
    }
}
