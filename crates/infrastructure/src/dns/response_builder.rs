use gateway_dns_application::use_cases::Resolution;
use gateway_dns_domain::{AnswerResult, DomainError, Zone};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::IpAddr;

/// Record sections and result code of an authoritative answer.
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub rcode: ResponseCode,
    pub answers: Vec<Record>,
    pub authority: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl GatewayResponse {
    fn empty(rcode: ResponseCode) -> Self {
        Self {
            rcode,
            answers: Vec::new(),
            authority: Vec::new(),
            additionals: Vec::new(),
        }
    }
}

/// Maps an [`AnswerResult`] onto DNS record sections.
///
/// | result      | rcode    | answer            | authority | additional |
/// |-------------|----------|-------------------|-----------|------------|
/// | `Answer`    | NoError  | A/AAAA per address| -         | -          |
/// | `NoData`    | NoError  | -                 | zone SOA  | -          |
/// | `NameError` | NXDomain | -                 | zone SOA  | -          |
/// | `ApexNs`    | NoError  | NS per host       | -         | glue       |
/// | `ZoneSoa`   | NoError  | zone SOA          | -         | -          |
///
/// `owner` is the query name exactly as received, used for the queried
/// owner name. NS targets and the SOA use their configured spelling.
pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn build(resolution: &Resolution, owner: &Name) -> Result<GatewayResponse, DomainError> {
        let zone = &resolution.zone;

        let response = match &resolution.result {
            AnswerResult::Answer(addresses) => {
                let mut response = GatewayResponse::empty(ResponseCode::NoError);
                response.answers = addresses
                    .iter()
                    .map(|addr| address_record(owner.clone(), zone.ttl, *addr))
                    .collect();
                response
            }
            AnswerResult::NoData => {
                let mut response = GatewayResponse::empty(ResponseCode::NoError);
                response.authority.push(Self::soa_record(zone)?);
                response
            }
            AnswerResult::NameError => {
                let mut response = GatewayResponse::empty(ResponseCode::NXDomain);
                response.authority.push(Self::soa_record(zone)?);
                response
            }
            AnswerResult::ApexNs { hosts, glue } => {
                let mut response = GatewayResponse::empty(ResponseCode::NoError);
                for host in hosts {
                    response.answers.push(Record::from_rdata(
                        owner.clone(),
                        zone.soa_ttl,
                        RData::NS(NS(parse_name(host)?)),
                    ));
                }
                for entry in glue {
                    response.additionals.push(address_record(
                        parse_name(&entry.host)?,
                        zone.soa_ttl,
                        entry.address,
                    ));
                }
                response
            }
            AnswerResult::ZoneSoa => {
                let mut response = GatewayResponse::empty(ResponseCode::NoError);
                response.answers.push(Self::soa_record(zone)?);
                response
            }
        };

        Ok(response)
    }

    /// The zone's SOA, owned by the zone origin.
    pub fn soa_record(zone: &Zone) -> Result<Record, DomainError> {
        let soa = SOA::new(
            parse_name(&zone.soa.mname)?,
            parse_name(&zone.soa.rname)?,
            zone.soa.serial,
            zone.soa.refresh,
            zone.soa.retry,
            zone.soa.expire,
            zone.soa.minimum,
        );
        Ok(Record::from_rdata(
            parse_name(zone.origin())?,
            zone.soa_ttl,
            RData::SOA(soa),
        ))
    }
}

fn address_record(name: Name, ttl: u32, address: IpAddr) -> Record {
    let rdata = match address {
        IpAddr::V4(v4) => RData::A(A::from(v4)),
        IpAddr::V6(v6) => RData::AAAA(AAAA::from(v6)),
    };
    Record::from_rdata(name, ttl, rdata)
}

fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_ascii(name).map_err(|e| DomainError::InvalidDomainName(format!("{name}: {e}")))
}
