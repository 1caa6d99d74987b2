#![allow(dead_code)]

//! Raw provider response documents shared across the integration tests.

pub const SUCCESSFUL_AUTHORIZE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <Overview>
   <AuthCode DataType="String">889350</AuthCode>
   <CcErrCode DataType="S32">1</CcErrCode>
   <CcReturnMsg DataType="String">Approved.</CcReturnMsg>
   <DateTime DataType="DateTime">1212066788586</DateTime>
   <Mode DataType="String">Y</Mode>
   <OrderId DataType="String">483e6382-7d12-3001-002b-0003bac00fc9</OrderId>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">A</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

pub const FAILED_AUTHORIZE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <OrderFormDoc>
   <Id DataType="String">48b7024c-0322-3002-002a-0003ba9a87ff</Id>
   <Mode DataType="String">Y</Mode>
   <Transaction>
    <Id DataType="String">48b7024c-0323-3002-002a-0003ba9a87ff</Id>
    <Type DataType="String">PreAuth</Type>
   </Transaction>
  </OrderFormDoc>
  <Overview>
   <CcErrCode DataType="S32">1067</CcErrCode>
   <CcReturnMsg DataType="String">System error.</CcReturnMsg>
   <DateTime DataType="DateTime">1219953701297</DateTime>
   <Mode DataType="String">Y</Mode>
   <Notice DataType="String">Unable to determine card type. (&apos;length&apos; is &apos;16&apos;)</Notice>
   <TransactionId DataType="String">48b7024c-0323-3002-002a-0003ba9a87ff</TransactionId>
   <TransactionStatus DataType="String">E</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

pub const SUCCESSFUL_CAPTURE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <OrderFormDoc>
   <DateTime DataType="DateTime">1219956808155</DateTime>
   <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
   <Mode DataType="String">Y</Mode>
   <Transaction>
    <AuthCode DataType="String">797220</AuthCode>
    <CardProcResp>
     <CcErrCode DataType="S32">1</CcErrCode>
     <CcReturnMsg DataType="String">Approved.</CcReturnMsg>
     <Status DataType="String">1</Status>
    </CardProcResp>
    <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
    <Type DataType="String">PostAuth</Type>
   </Transaction>
  </OrderFormDoc>
  <Overview>
   <AuthCode DataType="String">797220</AuthCode>
   <CcErrCode DataType="S32">1</CcErrCode>
   <CcReturnMsg DataType="String">Approved.</CcReturnMsg>
   <DateTime DataType="DateTime">1219956808155</DateTime>
   <Mode DataType="String">Y</Mode>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">A</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

pub const FAILED_CAPTURE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <OrderFormDoc>
   <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
   <Mode DataType="String">Y</Mode>
   <Transaction>
    <CardProcResp>
     <CcErrCode DataType="S32">1067</CcErrCode>
     <CcReturnMsg DataType="String">Denied.</CcReturnMsg>
     <Status DataType="String">1</Status>
    </CardProcResp>
    <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
    <Type DataType="String">PostAuth</Type>
   </Transaction>
  </OrderFormDoc>
  <Overview>
   <CcErrCode DataType="S32">1067</CcErrCode>
   <CcReturnMsg DataType="String">Denied.</CcReturnMsg>
   <DateTime DataType="DateTime">1219956808155</DateTime>
   <Mode DataType="String">Y</Mode>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">E</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

/// Approved authorize whose AVS display reports no street or postal match.
pub const AVS_NO_MATCH_AUTHORIZE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <OrderFormDoc>
   <Overview>
    <AvsDisplay>NN</AvsDisplay>
    <Cvv2Resp>2</Cvv2Resp>
   </Overview>
  </OrderFormDoc>
  <Overview>
   <AuthCode DataType="String">889350</AuthCode>
   <CcErrCode DataType="S32">1</CcErrCode>
   <CcReturnMsg DataType="String">Approved.</CcReturnMsg>
   <Mode DataType="String">Y</Mode>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">A</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

/// Void whose outcome and verification fields sit under
/// `OrderFormDoc/Transaction/CardProcResp`.
pub const SUCCESSFUL_VOID_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <OrderFormDoc>
   <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
   <Mode DataType="String">Y</Mode>
   <Transaction>
    <AuthCode DataType="String">797220</AuthCode>
    <CardProcResp>
     <AvsDisplay>YN</AvsDisplay>
     <CcErrCode DataType="S32">1</CcErrCode>
     <CcReturnMsg DataType="String">Approved.</CcReturnMsg>
     <Cvv2Resp>1</Cvv2Resp>
     <Status DataType="String">1</Status>
    </CardProcResp>
    <Id DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</Id>
    <Type DataType="String">Void</Type>
   </Transaction>
  </OrderFormDoc>
  <Overview>
   <Mode DataType="String">Y</Mode>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">V</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#;

/// Builds a minimal authorize response with the given overview return code.
pub fn authorize_response_with_code(code: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<EngineDocList>
 <DocVersion DataType="String">1.0</DocVersion>
 <EngineDoc>
  <Overview>
   <CcErrCode DataType="S32">{code}</CcErrCode>
   <CcReturnMsg DataType="String">Held for review.</CcReturnMsg>
   <TransactionId DataType="String">483e6382-7d13-3001-002b-0003bac00fc9</TransactionId>
   <TransactionStatus DataType="String">F</TransactionStatus>
  </Overview>
 </EngineDoc>
</EngineDocList>"#
    )
}
