use crate::{
    data::student::{Student, StudentFields},
    error::{ApiBaseCannotBeABaseSnafu, ApiRequestSnafu, ParseApiBaseSnafu, PupilError, PupilResult},
};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use snafu::{ResultExt, ensure};

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

///Talks to the students JSON API over HTTP, one request per call.
#[derive(Clone, Debug)]
pub struct StudentsApi {
    http: Client,
    base: Url,
}

impl StudentsApi {
    pub fn new(base: &str) -> PupilResult<Self> {
        let parsed = Url::parse(base).context(ParseApiBaseSnafu { original: base })?;
        ensure!(
            !parsed.cannot_be_a_base(),
            ApiBaseCannotBeABaseSnafu { original: base }
        );

        Ok(Self {
            http: Client::new(),
            base: parsed,
        })
    }

    ///`/students`, or `/students/{id}` with the id as one percent-encoded segment
    fn url(&self, id: Option<&str>) -> Url {
        let mut url = self.base.clone();
        //can't fail, `new` rejects cannot-be-a-base urls
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("students");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    pub async fn list(&self) -> PupilResult<Vec<Student>> {
        let rsp = self
            .http
            .get(self.url(None))
            .send()
            .await
            .context(ApiRequestSnafu)?;
        check(rsp).await?.json().await.context(ApiRequestSnafu)
    }

    pub async fn get(&self, id: &str) -> PupilResult<Student> {
        let rsp = self
            .http
            .get(self.url(Some(id)))
            .send()
            .await
            .context(ApiRequestSnafu)?;
        check(rsp).await?.json().await.context(ApiRequestSnafu)
    }

    pub async fn create(&self, fields: &StudentFields) -> PupilResult<Student> {
        let rsp = self
            .http
            .post(self.url(None))
            .json(fields)
            .send()
            .await
            .context(ApiRequestSnafu)?;
        check(rsp).await?.json().await.context(ApiRequestSnafu)
    }

    pub async fn update(&self, id: &str, fields: &StudentFields) -> PupilResult<Student> {
        let rsp = self
            .http
            .put(self.url(Some(id)))
            .json(fields)
            .send()
            .await
            .context(ApiRequestSnafu)?;
        check(rsp).await?.json().await.context(ApiRequestSnafu)
    }

    pub async fn delete(&self, id: &str) -> PupilResult<()> {
        let rsp = self
            .http
            .delete(self.url(Some(id)))
            .send()
            .await
            .context(ApiRequestSnafu)?;
        check(rsp).await?;
        Ok(())
    }
}

async fn check(rsp: Response) -> PupilResult<Response> {
    let status = rsp.status();
    if status.is_success() {
        return Ok(rsp);
    }

    //the API only ever sends `{message}`, but anything else shouldn't hide the status
    let message = rsp
        .json::<MessageBody>()
        .await
        .map_or_else(|_| status.to_string(), |body| body.message);
    warn!(%status, %message, "Students API returned an error");

    Err(PupilError::ApiStatus { status, message })
}
